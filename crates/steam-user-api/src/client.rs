//! Steam Web API HTTP client

use serde::de::DeserializeOwned;
use std::sync::Arc;
use steamid::SteamId;
use tracing::debug;

use crate::config::SteamConfig;
use crate::error::{Result, SteamApiError};
use crate::resolver::ResolvableInput;
use crate::transport::{HttpGet, ReqwestTransport};
use crate::types::{
    BansEnvelope, PlayerBans, PlayerSummary, SummariesEnvelope, VanityEnvelope,
};

/// Most SteamIDs GetPlayerSummaries and GetPlayerBans accept in one request
pub const MAX_TARGETS: usize = 100;

const SUMMARIES_PATH: &str = "ISteamUser/GetPlayerSummaries/v0002";
const BANS_PATH: &str = "ISteamUser/GetPlayerBans/v1";
const VANITY_PATH: &str = "ISteamUser/ResolveVanityURL/v0001";

/// Client for the `ISteamUser` interface of the Steam Web API
///
/// Holds its own key, so several clients with different keys can coexist.
/// Share one instance behind an `Arc` for concurrent use.
pub struct SteamUserClient {
    transport: Arc<dyn HttpGet>,
    config: SteamConfig,
}

impl SteamUserClient {
    /// Create a client that talks HTTP through reqwest
    pub fn new(config: SteamConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client from `STEAM_API_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(SteamConfig::from_env()?)
    }

    /// Create a client on top of a custom transport
    pub fn with_transport(config: SteamConfig, transport: Arc<dyn HttpGet>) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &SteamConfig {
        &self.config
    }

    /// Fetch profile summaries for up to [`MAX_TARGETS`] SteamIDs
    ///
    /// Profiles Steam does not know are simply missing from the result, and
    /// the order follows Steam's response rather than `ids`.
    pub async fn get_player_summaries(&self, ids: &[SteamId]) -> Result<Vec<PlayerSummary>> {
        let Some(steamids) = join_targets(ids)? else {
            return Ok(vec![]);
        };

        debug!(targets = ids.len(), "Fetching player summaries");
        let url = self.endpoint(SUMMARIES_PATH, &format!("steamids={}", steamids));
        let data: SummariesEnvelope = self.get_json(&url).await?;
        Ok(data.response.players)
    }

    /// Fetch ban records for up to [`MAX_TARGETS`] SteamIDs
    pub async fn get_player_bans(&self, ids: &[SteamId]) -> Result<Vec<PlayerBans>> {
        let Some(steamids) = join_targets(ids)? else {
            return Ok(vec![]);
        };

        debug!(targets = ids.len(), "Fetching player bans");
        let url = self.endpoint(BANS_PATH, &format!("steamids={}", steamids));
        let data: BansEnvelope = self.get_json(&url).await?;
        Ok(data.players)
    }

    /// Look up the SteamID behind a vanity name
    ///
    /// Fails with `RemoteLookupFailed` when Steam answers without a match.
    pub async fn resolve_vanity_url(&self, vanity: &str) -> Result<SteamId> {
        debug!(vanity, "Resolving vanity URL");
        let url = self.endpoint(
            VANITY_PATH,
            &format!("vanityurl={}", urlencoding::encode(vanity)),
        );
        let data: VanityEnvelope = self.get_json(&url).await?;
        let response = data.response;

        match response.steamid {
            Some(steamid) if response.success == 1 => SteamId::parse(&steamid).map_err(|_| {
                SteamApiError::RemoteLookupFailed(format!("unparsable steamid {:?}", steamid))
            }),
            _ => Err(SteamApiError::RemoteLookupFailed(
                response
                    .message
                    .unwrap_or_else(|| format!("success code {}", response.success)),
            )),
        }
    }

    /// Resolve any identifier form and fetch that player's summary
    pub async fn get_player_summary(
        &self,
        input: impl Into<ResolvableInput>,
    ) -> Result<Option<PlayerSummary>> {
        let id = self.resolve_identifier(input).await?;
        Ok(self.get_player_summaries(&[id]).await?.into_iter().next())
    }

    /// Resolve any identifier form and fetch that player's ban record
    pub async fn get_player_bans_for(
        &self,
        input: impl Into<ResolvableInput>,
    ) -> Result<Option<PlayerBans>> {
        let id = self.resolve_identifier(input).await?;
        Ok(self.get_player_bans(&[id]).await?.into_iter().next())
    }

    fn endpoint(&self, path: &str, query: &str) -> String {
        format!(
            "{}/{}/?key={}&{}",
            self.config.base_url,
            path,
            urlencoding::encode(&self.config.api_key),
            query
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.transport.get(url).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Comma-join the targets of a bulk call, `None` when there is nothing to ask
fn join_targets(ids: &[SteamId]) -> Result<Option<String>> {
    if ids.len() > MAX_TARGETS {
        return Err(SteamApiError::TooManyTargets(ids.len()));
    }
    if ids.is_empty() {
        return Ok(None);
    }
    Ok(Some(
        ids.iter()
            .map(SteamId::to_string)
            .collect::<Vec<_>>()
            .join(","),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::fake::FakeTransport;

    const GABEN: u64 = 76561197960287930;

    const SUMMARIES_BODY: &str = r#"{
        "response": {
            "players": [
                {
                    "steamid": "76561197960287930",
                    "communityvisibilitystate": 3,
                    "profilestate": 1,
                    "personaname": "Rabscuttle",
                    "personastate": 0
                }
            ]
        }
    }"#;

    const BANS_BODY: &str = r#"{
        "players": [
            {
                "SteamId": "76561197960287930",
                "CommunityBanned": false,
                "VACBanned": false,
                "NumberOfVACBans": 0,
                "DaysSinceLastBan": 0,
                "NumberOfGameBans": 0,
                "EconomyBan": "none"
            }
        ]
    }"#;

    fn client_with(fake: Arc<FakeTransport>) -> SteamUserClient {
        SteamUserClient::with_transport(
            SteamConfig::new("TESTKEY").with_base_url("http://steam.test"),
            fake,
        )
    }

    fn many_ids(count: u32) -> Vec<SteamId> {
        (1..=count).map(SteamId::from_individual_account_id).collect()
    }

    #[tokio::test]
    async fn test_get_player_summaries() {
        let fake = Arc::new(FakeTransport::new().respond("GetPlayerSummaries", SUMMARIES_BODY));
        let client = client_with(fake.clone());

        let ids = [SteamId::from_u64(GABEN), SteamId::from_u64(76561198012345678)];
        let players = client.get_player_summaries(&ids).await.unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].persona_name.as_deref(), Some("Rabscuttle"));

        assert_eq!(
            fake.calls(),
            vec![
                "http://steam.test/ISteamUser/GetPlayerSummaries/v0002/?key=TESTKEY\
                 &steamids=76561197960287930,76561198012345678"
                    .to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_get_player_bans() {
        let fake = Arc::new(FakeTransport::new().respond("GetPlayerBans", BANS_BODY));
        let client = client_with(fake.clone());

        let bans = client
            .get_player_bans(&[SteamId::from_u64(GABEN)])
            .await
            .unwrap();
        assert_eq!(bans.len(), 1);
        assert!(!bans[0].has_any_ban());
        assert!(fake.calls()[0].contains("/ISteamUser/GetPlayerBans/v1/?key=TESTKEY"));
    }

    #[tokio::test]
    async fn test_too_many_targets_rejected_before_request() {
        let fake = Arc::new(
            FakeTransport::new()
                .respond("GetPlayerSummaries", SUMMARIES_BODY)
                .respond("GetPlayerBans", BANS_BODY),
        );
        let client = client_with(fake.clone());
        let ids = many_ids(101);

        let err = client.get_player_summaries(&ids).await.unwrap_err();
        assert!(matches!(err, SteamApiError::TooManyTargets(101)));

        let err = client.get_player_bans(&ids).await.unwrap_err();
        assert!(matches!(err, SteamApiError::TooManyTargets(101)));

        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_exactly_max_targets_is_accepted() {
        let fake = Arc::new(FakeTransport::new().respond("GetPlayerBans", r#"{"players": []}"#));
        let client = client_with(fake.clone());

        let bans = client.get_player_bans(&many_ids(100)).await.unwrap();
        assert!(bans.is_empty());
        assert_eq!(fake.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_players_is_empty_vec() {
        let fake = Arc::new(
            FakeTransport::new()
                .respond("GetPlayerSummaries", r#"{"response": {"players": []}}"#)
                .respond("GetPlayerBans", r#"{"players": []}"#),
        );
        let client = client_with(fake.clone());
        let ids = [SteamId::from_u64(GABEN)];

        assert!(client.get_player_summaries(&ids).await.unwrap().is_empty());
        assert!(client.get_player_bans(&ids).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_target_list_makes_no_request() {
        let fake = Arc::new(FakeTransport::new());
        let client = client_with(fake.clone());

        assert!(client.get_player_summaries(&[]).await.unwrap().is_empty());
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_bulk_fetch_propagates_transport_errors() {
        let fake = Arc::new(FakeTransport::new().fail("GetPlayerSummaries", 403));
        let client = client_with(fake);

        let err = client
            .get_player_summaries(&[SteamId::from_u64(GABEN)])
            .await
            .unwrap_err();
        assert!(matches!(err, SteamApiError::UnexpectedStatus(403)));
    }

    #[tokio::test]
    async fn test_bulk_fetch_reports_malformed_json() {
        let fake = Arc::new(FakeTransport::new().respond("GetPlayerBans", "<html>oops</html>"));
        let client = client_with(fake);

        let err = client
            .get_player_bans(&[SteamId::from_u64(GABEN)])
            .await
            .unwrap_err();
        assert!(matches!(err, SteamApiError::Json(_)));
    }

    #[tokio::test]
    async fn test_resolve_vanity_url() {
        let fake = Arc::new(FakeTransport::new().respond(
            "ResolveVanityURL",
            r#"{"response": {"steamid": "76561197960287930", "success": 1}}"#,
        ));
        let client = client_with(fake.clone());

        let id = client.resolve_vanity_url("gabe newell").await.unwrap();
        assert_eq!(id.as_u64(), GABEN);
        assert!(fake.calls()[0].ends_with("&vanityurl=gabe%20newell"));
    }

    #[tokio::test]
    async fn test_resolve_vanity_url_no_match() {
        let fake = Arc::new(FakeTransport::new().respond(
            "ResolveVanityURL",
            r#"{"response": {"success": 42, "message": "No match"}}"#,
        ));
        let client = client_with(fake);

        let err = client.resolve_vanity_url("coolname").await.unwrap_err();
        assert!(matches!(err, SteamApiError::RemoteLookupFailed(ref msg) if msg == "No match"));
    }

    #[tokio::test]
    async fn test_resolve_vanity_url_propagates_transport_errors() {
        let fake = Arc::new(FakeTransport::new().fail("ResolveVanityURL", 500));
        let client = client_with(fake);

        let err = client.resolve_vanity_url("coolname").await.unwrap_err();
        assert!(matches!(err, SteamApiError::UnexpectedStatus(500)));
    }

    #[tokio::test]
    async fn test_get_player_summary_resolves_vanity_first() {
        let fake = Arc::new(
            FakeTransport::new()
                .respond(
                    "ResolveVanityURL",
                    r#"{"response": {"steamid": "76561197960287930", "success": 1}}"#,
                )
                .respond("GetPlayerSummaries", SUMMARIES_BODY),
        );
        let client = client_with(fake.clone());

        let player = client
            .get_player_summary("https://steamcommunity.com/id/gabelogannewell/")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(player.steam_id.as_u64(), GABEN);

        let calls = fake.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].contains("ResolveVanityURL"));
        assert!(calls[1].ends_with("&steamids=76561197960287930"));
    }

    #[tokio::test]
    async fn test_get_player_bans_for_unknown_player() {
        let fake = Arc::new(FakeTransport::new().respond("GetPlayerBans", r#"{"players": []}"#));
        let client = client_with(fake.clone());

        let bans = client.get_player_bans_for("[U:1:22202]").await.unwrap();
        assert!(bans.is_none());
        assert_eq!(fake.calls().len(), 1);
    }

    #[test]
    fn test_api_key_is_url_encoded() {
        let client = SteamUserClient::with_transport(
            SteamConfig::new("a&b"),
            Arc::new(FakeTransport::new()),
        );
        let url = client.endpoint(BANS_PATH, "steamids=1");
        assert_eq!(
            url,
            "https://api.steampowered.com/ISteamUser/GetPlayerBans/v1/?key=a%26b&steamids=1"
        );
    }
}
