//! Steam account identifiers
//!
//! Parses the three textual forms a Steam account ID shows up in and packs
//! them into the canonical 64-bit value:
//!
//! - SteamID64: `76561197960287930`
//! - Steam2: `STEAM_0:0:11101`
//! - Steam3: `[U:1:22202]`
//!
//! ```
//! use steamid::SteamId;
//!
//! let id: SteamId = "STEAM_0:0:11101".parse().unwrap();
//! assert_eq!(id.to_string(), "76561197960287930");
//! assert_eq!(id.steam3(), "[U:1:22202]");
//! ```

mod error;
mod id;
mod kind;

pub use error::{Result, SteamIdError};
pub use id::SteamId;
pub use kind::{AccountType, ChatInstanceFlags, Instance, Universe};
