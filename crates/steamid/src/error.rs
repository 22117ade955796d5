//! Error types for SteamID parsing

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SteamIdError {
    /// Input matched none of the SteamID64, Steam2 or Steam3 grammars
    UnknownFormat(String),
    /// Input matched a grammar but a component does not fit its bit field
    OutOfRange(String),
}

impl fmt::Display for SteamIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SteamIdError::UnknownFormat(input) => {
                write!(f, "Unknown SteamID input format: {:?}", input)
            }
            SteamIdError::OutOfRange(input) => {
                write!(f, "SteamID component out of range: {:?}", input)
            }
        }
    }
}

impl std::error::Error for SteamIdError {}

pub type Result<T> = std::result::Result<T, SteamIdError>;
