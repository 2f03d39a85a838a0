use crate::entities::parse_search_response;
use futures::future::BoxFuture;
use lineup::{PlayerSource, SearchError, SearchResultItem};
use log::debug;
use std::time::{Duration, Instant};

pub const DEFAULT_BASE_URL: &str = "https://www.thesportsdb.com";
pub const DEFAULT_API_KEY: &str = "123";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct SportsDbSettings {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl Default for SportsDbSettings {
    fn default() -> Self {
        SportsDbSettings {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Player search against TheSportsDB v1 JSON API.
pub struct SportsDbClient {
    http: reqwest::Client,
    search_url: String,
}

impl SportsDbClient {
    pub fn new(settings: &SportsDbSettings) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("lineup-builder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(SportsDbClient {
            http,
            search_url: SportsDbClient::search_url(settings),
        })
    }

    pub fn search_url(settings: &SportsDbSettings) -> String {
        format!(
            "{}/api/v1/json/{}/searchplayers.php",
            settings.base_url.trim_end_matches('/'),
            settings.api_key
        )
    }

    pub async fn search_players(&self, query: &str) -> Result<Vec<SearchResultItem>, SearchError> {
        let now = Instant::now();

        let response = self
            .http
            .get(&self.search_url)
            .query(&[("p", query)])
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let players = parse_search_response(&body)?;

        debug!(
            "sportsdb: '{}' -> {} players in {} ms",
            query,
            players.len(),
            now.elapsed().as_millis()
        );

        Ok(players)
    }
}

impl PlayerSource for SportsDbClient {
    fn search<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Vec<SearchResultItem>, SearchError>> {
        Box::pin(self.search_players(query))
    }
}
