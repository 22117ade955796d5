//! Error types for the Steam Web API client

use std::fmt;

/// Errors that can occur when talking to the Steam Web API
#[derive(Debug)]
pub enum SteamApiError {
    /// Input could not be parsed as any SteamID form
    InvalidIdentifierFormat(String),
    /// A bulk call was given more targets than the API accepts
    TooManyTargets(usize),
    /// Vanity URL lookup answered without an identifier
    RemoteLookupFailed(String),
    /// HTTP request failed
    Http(Box<reqwest::Error>),
    /// Server answered with a non-success status code
    UnexpectedStatus(u16),
    /// Failed to parse JSON response
    Json(serde_json::Error),
    /// Missing or malformed configuration
    Config(String),
}

impl fmt::Display for SteamApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIdentifierFormat(input) => {
                write!(f, "Invalid SteamID format: {:?}", input)
            }
            Self::TooManyTargets(count) => write!(
                f,
                "Too many targets: {} (at most {} per request)",
                count,
                crate::client::MAX_TARGETS
            ),
            Self::RemoteLookupFailed(msg) => write!(f, "Vanity URL lookup failed: {}", msg),
            Self::Http(e) => write!(f, "Steam HTTP error: {}", e),
            Self::UnexpectedStatus(status) => write!(f, "Steam API returned status {}", status),
            Self::Json(e) => write!(f, "Steam JSON parse error: {}", e),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for SteamApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e.as_ref()),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

/// The request URL is dropped because it carries the API key
impl From<reqwest::Error> for SteamApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(Box::new(e.without_url()))
    }
}

impl From<serde_json::Error> for SteamApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Result type for Steam Web API operations
pub type Result<T> = std::result::Result<T, SteamApiError>;
