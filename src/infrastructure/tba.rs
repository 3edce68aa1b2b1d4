//! # The Blue Alliance Client
//!
//! Implements the `StatsProvider` trait against the TBA v3 read API.
//! Each lookup is a single authenticated GET: no retries, no caching.
//! Failures are typed internally (`FetchError`) and logged, then collapsed to `None`
//! at the trait boundary so callers only learn that there is nothing to show.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::domain::config::TbaConfig;
use crate::domain::traits::StatsProvider;
use crate::domain::types::{Award, Event, EventRankings, EventStatus, Team, TeamKey};

const AUTH_HEADER: &str = "X-TBA-Auth-Key";
const USER_AGENT: &str = concat!("frchan/", env!("CARGO_PKG_VERSION"));

/// Why a lookup produced nothing.
#[derive(Debug)]
pub enum FetchError {
    InvalidKey(String),
    Transport(reqwest::Error),
    Status(reqwest::StatusCode),
    Decode(reqwest::Error),
    /// The API answered `null`.
    Empty,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::InvalidKey(raw) => write!(f, "invalid team key '{}'", raw),
            FetchError::Transport(e) => write!(f, "HTTP request failed: {}", e),
            FetchError::Status(status) => write!(f, "API returned {}", status),
            FetchError::Decode(e) => write!(f, "failed to decode response: {}", e),
            FetchError::Empty => write!(f, "API returned an empty body"),
        }
    }
}

impl std::error::Error for FetchError {}

pub struct TbaClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl TbaClient {
    pub fn new(config: &TbaConfig) -> anyhow::Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// GET `path`, keeping a `null` body as `None`.
    async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(AUTH_HEADER, &self.api_key)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        response.json::<Option<T>>().await.map_err(FetchError::Decode)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        self.get_optional(path).await?.ok_or(FetchError::Empty)
    }

    fn team_key(raw: &str) -> Result<TeamKey, FetchError> {
        TeamKey::parse(raw).ok_or_else(|| FetchError::InvalidKey(raw.to_string()))
    }

    pub async fn try_fetch_team(&self, team_key: &str) -> Result<Team, FetchError> {
        let key = Self::team_key(team_key)?;
        self.get(&format!("/team/{}", key)).await
    }

    pub async fn try_fetch_team_awards(&self, team_key: &str) -> Result<Vec<Award>, FetchError> {
        let key = Self::team_key(team_key)?;
        self.get(&format!("/team/{}/awards", key)).await
    }

    pub async fn try_fetch_team_events(&self, team_key: &str) -> Result<Vec<Event>, FetchError> {
        let key = Self::team_key(team_key)?;
        self.get(&format!("/team/{}/events/simple", key)).await
    }

    pub async fn try_fetch_event_status(
        &self,
        team_key: &str,
        event_key: &str,
    ) -> Result<EventStatus, FetchError> {
        let key = Self::team_key(team_key)?;
        // `null` means the team has no status at this event yet.
        self.get_optional(&format!("/team/{}/event/{}/status", key, event_key))
            .await
            .map(Option::unwrap_or_default)
    }

    pub async fn try_fetch_event_rankings(
        &self,
        event_key: &str,
    ) -> Result<EventRankings, FetchError> {
        self.get(&format!("/event/{}/rankings", event_key)).await
    }
}

fn collapse<T>(what: &str, result: Result<T, FetchError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e @ FetchError::InvalidKey(_)) => {
            tracing::debug!("Skipped {} request: {}", what, e);
            None
        }
        Err(e) => {
            tracing::warn!("Failed {} request: {}", what, e);
            None
        }
    }
}

#[async_trait]
impl StatsProvider for TbaClient {
    async fn fetch_team(&self, team_key: &str) -> Option<Team> {
        collapse("team info", self.try_fetch_team(team_key).await)
    }

    async fn fetch_team_awards(&self, team_key: &str) -> Option<Vec<Award>> {
        collapse("team awards", self.try_fetch_team_awards(team_key).await)
    }

    async fn fetch_team_events(&self, team_key: &str) -> Option<Vec<Event>> {
        collapse("team events", self.try_fetch_team_events(team_key).await)
    }

    async fn fetch_event_status(&self, team_key: &str, event_key: &str) -> Option<EventStatus> {
        collapse(
            "event status",
            self.try_fetch_event_status(team_key, event_key).await,
        )
    }

    async fn fetch_event_rankings(&self, event_key: &str) -> Option<EventRankings> {
        collapse(
            "event rankings",
            self.try_fetch_event_rankings(event_key).await,
        )
    }
}
