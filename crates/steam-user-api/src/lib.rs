//! Rust client for the `ISteamUser` interface of the Steam Web API
//!
//! Fetches player summaries and ban records, and resolves whatever a user
//! typed (SteamID64, Steam2/Steam3 ID, profile URL or vanity name) into a
//! [`SteamId`].
//!
//! # Example
//!
//! ```no_run
//! use steam_user_api::{SteamConfig, SteamUserClient};
//!
//! # async fn example() -> Result<(), steam_user_api::SteamApiError> {
//! let client = SteamUserClient::new(SteamConfig::new("YOUR_KEY"))?;
//!
//! let id = client
//!     .resolve_identifier("https://steamcommunity.com/id/gabelogannewell")
//!     .await?;
//!
//! for player in client.get_player_summaries(&[id]).await? {
//!     println!("{:?}", player.persona_name);
//! }
//! for bans in client.get_player_bans(&[id]).await? {
//!     println!("VAC banned: {}", bans.vac_banned);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - `GET /ISteamUser/GetPlayerSummaries/v0002` - Profile summaries (up to 100 IDs)
//! - `GET /ISteamUser/GetPlayerBans/v1` - Ban records (up to 100 IDs)
//! - `GET /ISteamUser/ResolveVanityURL/v0001` - Vanity name to SteamID

mod client;
mod config;
mod error;
mod resolver;
mod transport;
mod types;

pub use client::{SteamUserClient, MAX_TARGETS};
pub use config::{SteamConfig, DEFAULT_BASE_URL};
pub use error::{Result, SteamApiError};
pub use resolver::{
    is_valid_identifier, normalize_profile_url, resolve_identifier_sync, ResolvableInput,
};
pub use steamid::SteamId;
pub use transport::{HttpGet, ReqwestTransport};
pub use types::{CommunityVisibility, EconomyBan, PersonaState, PlayerBans, PlayerSummary};
