//! Client configuration

use std::fmt;
use std::time::Duration;

use crate::error::{Result, SteamApiError};

/// Default Steam Web API host
pub const DEFAULT_BASE_URL: &str = "https://api.steampowered.com";

/// Settings shared by every request a client makes
#[derive(Clone)]
pub struct SteamConfig {
    pub api_key: String,
    pub base_url: String,
    /// Whole-request timeout; `None` leaves reqwest's default in place
    pub timeout: Option<Duration>,
}

impl SteamConfig {
    /// Configuration for the public API host with the given key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load configuration from the environment
    ///
    /// - `STEAM_API_KEY` (required)
    /// - `STEAM_API_BASE_URL` (optional, defaults to [`DEFAULT_BASE_URL`])
    /// - `STEAM_API_TIMEOUT_SECS` (optional)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("STEAM_API_KEY")
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                SteamApiError::Config("STEAM_API_KEY environment variable is required".to_string())
            })?;

        let mut config = Self::new(api_key);

        if let Some(url) = lookup("STEAM_API_BASE_URL").filter(|u| !u.is_empty()) {
            config = config.with_base_url(url);
        }

        if let Some(secs) = lookup("STEAM_API_TIMEOUT_SECS").and_then(|s| s.parse::<u64>().ok()) {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

impl fmt::Debug for SteamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SteamConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
