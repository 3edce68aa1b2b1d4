//! # Domain Traits
//!
//! Abstract interfaces for the bot's collaborators (Chat, Statistics API, Presence).
//! Allows for pluggable implementations in the Infrastructure layer and in-memory fakes in tests.

use async_trait::async_trait;

use crate::domain::types::{Award, Embed, Event, EventRankings, EventStatus, Team};

/// Abstract interface for a Chat Provider bound to one channel (e.g., a Discord text channel)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send an embed to the channel, returning the new message id
    async fn send_embed(&self, embed: &Embed) -> Result<String, String>;

    /// Get the current channel ID
    fn channel_id(&self) -> String;

    /// Get the bot's own user ID
    fn own_user_id(&self) -> String;
}

/// Abstract interface for the statistics service.
///
/// Team-keyed lookups take the raw user argument. `None` means the lookup
/// produced nothing to show, whatever the reason.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    async fn fetch_team(&self, team_key: &str) -> Option<Team>;

    async fn fetch_team_awards(&self, team_key: &str) -> Option<Vec<Award>>;

    async fn fetch_team_events(&self, team_key: &str) -> Option<Vec<Event>>;

    async fn fetch_event_status(&self, team_key: &str, event_key: &str) -> Option<EventStatus>;

    /// Not used by any command yet.
    #[allow(dead_code)]
    async fn fetch_event_rankings(&self, event_key: &str) -> Option<EventRankings>;
}

/// Abstract interface for updating the bot's displayed status
#[async_trait]
pub trait PresenceProvider: Send + Sync {
    async fn set_streaming(&self, text: &str, url: &str) -> Result<(), String>;
}
