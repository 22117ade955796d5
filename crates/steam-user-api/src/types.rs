//! Data types for Steam Web API responses
//!
//! Field values are passed through exactly as Steam sends them. Optional
//! fields are `None` when Steam omitted them, which mostly depends on the
//! profile's visibility to the calling key.

use serde::{Deserialize, Serialize};
use steamid::SteamId;

/// Player profile from `ISteamUser/GetPlayerSummaries/v0002`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    // Always visible
    #[serde(rename = "steamid")]
    pub steam_id: SteamId,
    #[serde(rename = "personaname")]
    pub persona_name: Option<String>,
    #[serde(rename = "profileurl")]
    pub profile_url: Option<String>,
    pub avatar: Option<String>,
    #[serde(rename = "avatarmedium")]
    pub avatar_medium: Option<String>,
    #[serde(rename = "avatarfull")]
    pub avatar_full: Option<String>,
    #[serde(rename = "avatarhash")]
    pub avatar_hash: Option<String>,
    #[serde(rename = "personastate")]
    pub persona_state: Option<i32>,
    #[serde(rename = "communityvisibilitystate")]
    pub community_visibility_state: Option<i32>,
    /// 1 when the user has set up a community profile
    #[serde(rename = "profilestate")]
    pub profile_state: Option<i32>,
    /// Unix timestamp
    #[serde(rename = "lastlogoff")]
    pub last_logoff: Option<i64>,
    /// 1 when anyone may comment on the profile
    #[serde(rename = "commentpermission")]
    pub comment_permission: Option<i32>,

    // Visible when the profile is public
    #[serde(rename = "realname")]
    pub real_name: Option<String>,
    #[serde(rename = "primaryclanid")]
    pub primary_clan_id: Option<String>,
    /// Unix timestamp
    #[serde(rename = "timecreated")]
    pub time_created: Option<i64>,
    #[serde(rename = "loccountrycode")]
    pub loc_country_code: Option<String>,
    #[serde(rename = "locstatecode")]
    pub loc_state_code: Option<String>,
    #[serde(rename = "loccityid")]
    pub loc_city_id: Option<i64>,
    #[serde(rename = "personastateflags")]
    pub persona_state_flags: Option<i32>,

    // Visible while in game
    #[serde(rename = "gameid")]
    pub game_id: Option<String>,
    #[serde(rename = "gameserverip")]
    pub game_server_ip: Option<String>,
    #[serde(rename = "gameextrainfo")]
    pub game_extra_info: Option<String>,
}

impl PlayerSummary {
    pub fn persona_state(&self) -> Option<PersonaState> {
        self.persona_state.map(PersonaState::from_i32)
    }

    pub fn visibility(&self) -> Option<CommunityVisibility> {
        self.community_visibility_state
            .map(CommunityVisibility::from_i32)
    }

    pub fn is_public(&self) -> bool {
        self.visibility() == Some(CommunityVisibility::Public)
    }

    pub fn is_in_game(&self) -> bool {
        self.game_id.is_some()
    }
}

/// Online status reported in `personastate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonaState {
    Offline,
    Online,
    Busy,
    Away,
    Snooze,
    LookingToTrade,
    LookingToPlay,
    Unknown(i32),
}

impl PersonaState {
    pub fn from_i32(value: i32) -> Self {
        match value {
            0 => Self::Offline,
            1 => Self::Online,
            2 => Self::Busy,
            3 => Self::Away,
            4 => Self::Snooze,
            5 => Self::LookingToTrade,
            6 => Self::LookingToPlay,
            other => Self::Unknown(other),
        }
    }
}

/// Profile visibility reported in `communityvisibilitystate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunityVisibility {
    Private,
    FriendsOnly,
    Public,
    Unknown(i32),
}

impl CommunityVisibility {
    pub fn from_i32(value: i32) -> Self {
        match value {
            1 => Self::Private,
            2 => Self::FriendsOnly,
            3 => Self::Public,
            other => Self::Unknown(other),
        }
    }
}

/// Ban record from `ISteamUser/GetPlayerBans/v1`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerBans {
    #[serde(rename = "SteamId")]
    pub steam_id: SteamId,
    pub community_banned: bool,
    #[serde(rename = "VACBanned")]
    pub vac_banned: bool,
    #[serde(rename = "NumberOfVACBans")]
    pub number_of_vac_bans: u32,
    pub days_since_last_ban: u32,
    pub number_of_game_bans: u32,
    pub economy_ban: String,
}

impl PlayerBans {
    pub fn economy_ban(&self) -> EconomyBan {
        EconomyBan::from_str(&self.economy_ban)
    }

    /// Whether any kind of ban is on record
    pub fn has_any_ban(&self) -> bool {
        self.community_banned
            || self.vac_banned
            || self.number_of_vac_bans > 0
            || self.number_of_game_bans > 0
            || self.economy_ban() != EconomyBan::None
    }
}

/// Trade ban state reported in `EconomyBan`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EconomyBan {
    None,
    Probation,
    Banned,
    Other(String),
}

impl EconomyBan {
    /// Parse the economy ban string Steam sends
    pub fn from_str(s: &str) -> Self {
        match s {
            "none" => Self::None,
            "probation" => Self::Probation,
            "banned" => Self::Banned,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Envelope of the GetPlayerSummaries response
#[derive(Debug, Deserialize)]
pub(crate) struct SummariesEnvelope {
    pub(crate) response: SummariesResponse,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SummariesResponse {
    #[serde(default)]
    pub(crate) players: Vec<PlayerSummary>,
}

/// GetPlayerBans has no `response` wrapper
#[derive(Debug, Deserialize)]
pub(crate) struct BansEnvelope {
    #[serde(default)]
    pub(crate) players: Vec<PlayerBans>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VanityEnvelope {
    pub(crate) response: VanityResponse,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VanityResponse {
    pub(crate) success: i32,
    pub(crate) steamid: Option<String>,
    pub(crate) message: Option<String>,
}
