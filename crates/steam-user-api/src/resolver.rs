//! Turning user-supplied identifiers into SteamIDs
//!
//! Anything that already parses as a SteamID is resolved locally. Only strings
//! that look like vanity names reach the `ResolveVanityURL` endpoint.

use regex::Regex;
use std::sync::LazyLock;
use steamid::SteamId;
use tracing::{debug, warn};

use crate::client::SteamUserClient;
use crate::error::{Result, SteamApiError};

static PROFILE_URL_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:https?://)?(?:www\.)?steamcommunity\.com/(?:profiles|id)/").unwrap()
});

/// An identifier as handed to the client: either already parsed, or raw text
/// that may be a SteamID, a profile URL or a vanity name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvableInput {
    Id(SteamId),
    Raw(String),
}

impl From<SteamId> for ResolvableInput {
    fn from(id: SteamId) -> Self {
        Self::Id(id)
    }
}

impl From<&SteamId> for ResolvableInput {
    fn from(id: &SteamId) -> Self {
        Self::Id(*id)
    }
}

impl From<String> for ResolvableInput {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

impl From<&str> for ResolvableInput {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<&String> for ResolvableInput {
    fn from(raw: &String) -> Self {
        Self::Raw(raw.clone())
    }
}

/// Strip `steamcommunity.com/profiles/` and `steamcommunity.com/id/` prefixes
///
/// What remains is a bare SteamID64 or vanity name, without trailing slashes,
/// query string or fragment. A remainder that itself starts with a prefix is
/// stripped again, so normalizing twice gives the same result. Strings
/// without a recognized prefix are returned unchanged.
pub fn normalize_profile_url(input: &str) -> String {
    let Some(first) = PROFILE_URL_PREFIX_RE.find(input) else {
        return input.to_string();
    };

    let mut rest = &input[first.end()..];
    while let Some(prefix) = PROFILE_URL_PREFIX_RE.find(rest) {
        rest = &rest[prefix.end()..];
    }

    let rest = rest
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or(rest);
    rest.trim_end_matches('/').to_string()
}

/// Whether `candidate` parses as any SteamID form
pub fn is_valid_identifier(candidate: &str) -> bool {
    SteamId::parse(candidate).is_ok()
}

/// Parse `candidate` strictly, without any network lookup
pub fn resolve_identifier_sync(candidate: &str) -> Result<SteamId> {
    SteamId::parse(candidate)
        .map_err(|_| SteamApiError::InvalidIdentifierFormat(candidate.to_string()))
}

impl SteamUserClient {
    /// Resolve any identifier form to a SteamID
    ///
    /// Local parsing always wins: a string that is a SteamID, or a profile URL
    /// wrapping one, never causes a request. Otherwise the prefix-stripped
    /// string is looked up as a vanity name. A failed or empty lookup is not
    /// reported as such; the stripped string gets one last strict parse and
    /// the result is `InvalidIdentifierFormat` if that fails too.
    pub async fn resolve_identifier(&self, input: impl Into<ResolvableInput>) -> Result<SteamId> {
        let candidate = match input.into() {
            ResolvableInput::Id(id) => return Ok(id),
            ResolvableInput::Raw(raw) => raw,
        };

        if is_valid_identifier(&candidate) {
            debug!(input = %candidate, "Resolved SteamID locally");
            return resolve_identifier_sync(&candidate);
        }

        let normalized = normalize_profile_url(&candidate);
        if normalized.is_empty() {
            return Err(SteamApiError::InvalidIdentifierFormat(candidate));
        }
        if is_valid_identifier(&normalized) {
            debug!(input = %candidate, "Resolved SteamID from profile URL");
            return resolve_identifier_sync(&normalized);
        }

        match self.resolve_vanity_url(&normalized).await {
            Ok(id) => Ok(id),
            Err(e) => {
                warn!(vanity = %normalized, error = %e, "Vanity lookup failed, trying local parse");
                resolve_identifier_sync(&normalized)
            }
        }
    }
}
