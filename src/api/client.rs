//! The API client and its connection settings.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{info, instrument};

use super::assignment_api::AssignmentApi;
use super::campaign_api::CampaignApi;
use super::dispatch_api::DispatchApi;
use super::fetch_utils::fetch;
use super::http_client::create_http_client;
use super::planet_api::PlanetApi;
use super::statistics_api::StatisticsApi;
use super::status_api::StatusApi;
use super::steam_api::SteamApi;
use super::update_api::UpdateApi;
use super::urls::{DiveharderRoute, build_community_url, build_diveharder_url};
use super::war_api::WarApi;
use super::war_info_api::WarInfoApi;
use crate::config::Config;
use crate::config::validation::normalize_base_url;
use crate::constants::{self, diveharder};
use crate::error::AppError;
use crate::models::RawWarInfo;

/// Connection settings for [`ApiClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    pub community_url: String,
    pub diveharder_url: String,
    /// Sent as both `User-Agent` and `X-Super-Client`.
    pub user_agent: String,
    /// Sent as `X-Super-Contact` when set.
    pub user_contact: Option<String>,
    pub http_timeout_seconds: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            community_url: constants::OFFICIAL_COMMUNITY_URL.to_string(),
            diveharder_url: constants::OFFICIAL_DIVEHARDER_URL.to_string(),
            user_agent: constants::default_user_agent(),
            user_contact: None,
            http_timeout_seconds: constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
        }
    }
}

/// Base URLs are normalized here, since env overrides and hand-edited files
/// may omit the scheme.
impl From<&Config> for ClientSettings {
    fn from(config: &Config) -> Self {
        Self {
            community_url: normalize_base_url(&config.community_url),
            diveharder_url: normalize_base_url(&config.diveharder_url),
            user_agent: config.user_agent.clone(),
            user_contact: config.user_contact.clone(),
            http_timeout_seconds: config.http_timeout_seconds,
        }
    }
}

/// Client for the community Helldivers 2 API and the Diveharder API.
///
/// Resource groups are reached through accessor methods that borrow the client:
///
/// ```no_run
/// use diveharder::{ApiClient, ClientSettings};
///
/// # async fn run() -> Result<(), diveharder::AppError> {
/// let client = ApiClient::new(ClientSettings::default())?;
/// if let Some(dispatch) = client.dispatches().get_latest_dispatch().await? {
///     println!("{}", dispatch.as_plaintext());
/// }
/// # Ok(())
/// # }
/// ```
///
/// Every operation sends exactly one GET request. Cloning the client shares the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    settings: ClientSettings,
}

impl ApiClient {
    pub fn new(settings: ClientSettings) -> Result<Self, AppError> {
        let http = create_http_client(&settings)?;
        Ok(Self { http, settings })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(ClientSettings::from(config))
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    pub(crate) async fn get_community<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> Result<T, AppError> {
        let url = build_community_url(&self.settings.community_url, segments)?;
        fetch(&self.http, &url).await
    }

    pub(crate) async fn get_diveharder<T: DeserializeOwned>(
        &self,
        route: DiveharderRoute,
        endpoint: &str,
    ) -> Result<T, AppError> {
        let url = build_diveharder_url(&self.settings.diveharder_url, route, endpoint)?;
        fetch(&self.http, &url).await
    }

    pub fn dispatches(&self) -> DispatchApi<'_> {
        DispatchApi::new(self)
    }

    pub fn war(&self) -> WarApi<'_> {
        WarApi::new(self)
    }

    pub fn steam(&self) -> SteamApi<'_> {
        SteamApi::new(self)
    }

    pub fn planets(&self) -> PlanetApi<'_> {
        PlanetApi::new(self)
    }

    pub fn campaigns(&self) -> CampaignApi<'_> {
        CampaignApi::new(self)
    }

    pub fn assignments(&self) -> AssignmentApi<'_> {
        AssignmentApi::new(self)
    }

    pub fn status(&self) -> StatusApi<'_> {
        StatusApi::new(self)
    }

    pub fn war_info(&self) -> WarInfoApi<'_> {
        WarInfoApi::new(self)
    }

    pub fn statistics(&self) -> StatisticsApi<'_> {
        StatisticsApi::new(self)
    }

    pub fn updates(&self) -> UpdateApi<'_> {
        UpdateApi::new(self)
    }

    /// Combined Diveharder document (`v1/all`), returned untyped.
    #[instrument(skip(self))]
    pub async fn all(&self) -> Result<serde_json::Value, AppError> {
        info!("Fetching combined war document");
        self.get_diveharder(DiveharderRoute::V1, diveharder::ALL).await
    }

    /// Converts in-game time (seconds since the war started) to UTC using the
    /// war start date from `raw/war_info`.
    #[instrument(skip(self))]
    pub async fn fix_timestamp(&self, game_seconds: i64) -> Result<DateTime<Utc>, AppError> {
        let war_info: RawWarInfo = self
            .get_diveharder(DiveharderRoute::Raw, diveharder::WAR_INFO)
            .await?;

        war_info.game_time_to_utc(game_seconds).ok_or_else(|| {
            AppError::datetime_parse_error(format!(
                "War start {} plus {game_seconds}s is out of range",
                war_info.start_date
            ))
        })
    }
}

/// Client pointing both upstreams at a mock server.
#[cfg(test)]
pub(crate) fn test_client(server_uri: &str) -> ApiClient {
    ApiClient::new(ClientSettings {
        community_url: server_uri.to_string(),
        diveharder_url: server_uri.to_string(),
        user_agent: "diveharder-tests".to_string(),
        user_contact: Some("tests@example.com".to_string()),
        http_timeout_seconds: 5,
    })
    .expect("test client should build")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::war_info::tests::war_info_json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_settings_from_config() {
        let config = Config {
            community_url: "http://localhost:1".to_string(),
            user_contact: Some("me@example.com".to_string()),
            http_timeout_seconds: 12,
            ..Config::default()
        };

        let settings = ClientSettings::from(&config);
        assert_eq!(settings.community_url, "http://localhost:1");
        assert_eq!(settings.diveharder_url, constants::OFFICIAL_DIVEHARDER_URL);
        assert_eq!(settings.user_contact.as_deref(), Some("me@example.com"));
        assert_eq!(settings.http_timeout_seconds, 12);
    }

    #[test]
    fn test_settings_from_config_normalize_urls() {
        let config = Config {
            community_url: " api.example.com/ ".to_string(),
            diveharder_url: "localhost:9091//".to_string(),
            ..Config::default()
        };

        let settings = ClientSettings::from(&config);
        assert_eq!(settings.community_url, "https://api.example.com");
        assert_eq!(settings.diveharder_url, "https://localhost:9091");
    }

    #[tokio::test]
    async fn test_client_from_config_with_untrimmed_url() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": {}})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = Config {
            diveharder_url: format!("  {}//  ", mock_server.uri()),
            ..Config::default()
        };
        assert!(config.validate().is_ok());

        let client = ApiClient::from_config(&config).unwrap();
        assert_eq!(client.settings().diveharder_url, mock_server.uri());
        assert!(client.all().await.unwrap().get("status").is_some());
    }

    #[tokio::test]
    async fn test_scheme_less_url_is_not_a_builder_error() {
        let config = Config {
            diveharder_url: "127.0.0.1:1".to_string(),
            http_timeout_seconds: 2,
            ..Config::default()
        };
        assert!(config.validate().is_ok());

        let client = ApiClient::from_config(&config).unwrap();
        assert_eq!(client.settings().diveharder_url, "https://127.0.0.1:1");

        // Nothing listens on port 1, so the request must get as far as connecting.
        let err = client.all().await.unwrap_err();
        assert!(!err.to_string().contains("builder error"), "{err}");
    }

    #[tokio::test]
    async fn test_requests_carry_identity_headers() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/all"))
            .and(header("accept", "application/json"))
            .and(header("user-agent", "diveharder-tests"))
            .and(header("x-super-client", "diveharder-tests"))
            .and(header("x-super-contact", "tests@example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": {}})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let all = client.all().await.unwrap();
        assert!(all.get("status").is_some());
    }

    #[tokio::test]
    async fn test_contact_header_omitted_when_unset() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(ClientSettings {
            diveharder_url: mock_server.uri(),
            ..ClientSettings::default()
        })
        .unwrap();
        client.all().await.unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].headers.contains_key("x-super-contact"));
    }

    #[tokio::test]
    async fn test_fix_timestamp_uses_war_start() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/raw/war_info"))
            .respond_with(ResponseTemplate::new(200).set_body_json(war_info_json()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let fixed = client.fix_timestamp(3600).await.unwrap();
        assert_eq!(fixed.to_rfc3339(), "2024-01-23T21:05:13+00:00");
    }

    #[tokio::test]
    async fn test_fix_timestamp_out_of_range() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/raw/war_info"))
            .respond_with(ResponseTemplate::new(200).set_body_json(war_info_json()))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        for game_seconds in [i64::MAX, i64::MIN] {
            let err = client.fix_timestamp(game_seconds).await.unwrap_err();
            assert!(matches!(err, AppError::DateTimeParse(_)), "{err:?}");
        }
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/all"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client.all().await.unwrap_err();
        assert!(err.is_server_side());
    }
}
