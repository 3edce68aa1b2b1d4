//! # Discord Service Adapter
//!
//! Implements the `ChatProvider` and `PresenceProvider` traits for Discord using `serenity`,
//! and the gateway `EventHandler` that feeds incoming messages to the `CommandRouter`.

use async_trait::async_trait;
use serenity::all::{
    ActivityData, ChannelId, Context, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter,
    CreateMessage, EventHandler, Http, Message, OnlineStatus, Ready, ShardManager,
};
use std::sync::Arc;

use crate::application::router::CommandRouter;
use crate::domain::config::PresenceConfig;
use crate::domain::traits::{ChatProvider, PresenceProvider};
use crate::domain::types::Embed;

#[derive(Clone)]
pub struct DiscordService {
    http: Arc<Http>,
    channel: ChannelId,
    own_id: String,
}

impl DiscordService {
    pub fn new(http: Arc<Http>, channel: ChannelId, own_id: String) -> Self {
        Self {
            http,
            channel,
            own_id,
        }
    }
}

/// Convert the platform-neutral `Embed` into a serenity `CreateEmbed`.
fn build_embed(embed: &Embed) -> CreateEmbed {
    let mut builder = CreateEmbed::new();
    if let Some(ref author) = embed.author {
        let mut a = CreateEmbedAuthor::new(&author.name);
        if let Some(ref url) = author.url {
            a = a.url(url);
        }
        builder = builder.author(a);
    }
    if let Some(ref desc) = embed.description {
        builder = builder.description(desc);
    }
    if let Some(color) = embed.color {
        builder = builder.color(color);
    }
    for field in &embed.fields {
        builder = builder.field(&field.name, &field.value, field.inline);
    }
    if let Some(ref footer) = embed.footer {
        builder = builder.footer(CreateEmbedFooter::new(footer));
    }
    builder
}

#[async_trait]
impl ChatProvider for DiscordService {
    fn channel_id(&self) -> String {
        self.channel.to_string()
    }

    fn own_user_id(&self) -> String {
        self.own_id.clone()
    }

    async fn send_embed(&self, embed: &Embed) -> Result<String, String> {
        tracing::info!(
            "Bot sending embed to {}: {}",
            self.channel_id(),
            embed.author.as_ref().map_or("", |a| a.name.as_str())
        );
        self.channel
            .send_message(&self.http, CreateMessage::new().embed(build_embed(embed)))
            .await
            .map(|msg| msg.id.to_string())
            .map_err(|e| e.to_string())
    }
}

fn streaming_activity(text: &str, url: &str) -> ActivityData {
    ActivityData::streaming(text, url).unwrap_or_else(|e| {
        tracing::warn!("Invalid streaming url {}: {}", url, e);
        ActivityData::playing(text)
    })
}

/// Broadcasts presence updates to every running shard.
pub struct DiscordPresence {
    shard_manager: Arc<ShardManager>,
}

impl DiscordPresence {
    pub fn new(shard_manager: Arc<ShardManager>) -> Self {
        Self { shard_manager }
    }
}

#[async_trait]
impl PresenceProvider for DiscordPresence {
    async fn set_streaming(&self, text: &str, url: &str) -> Result<(), String> {
        let activity = streaming_activity(text, url);
        let runners = self.shard_manager.runners.lock().await;
        if runners.is_empty() {
            return Err("no shards are running".to_string());
        }
        for info in runners.values() {
            info.runner_tx
                .set_presence(Some(activity.clone()), OnlineStatus::Online);
        }
        Ok(())
    }
}

/// Gateway event handler. Each event runs on its own task.
pub struct Handler {
    router: Arc<CommandRouter>,
    presence: PresenceConfig,
}

impl Handler {
    pub fn new(router: Arc<CommandRouter>, presence: PresenceConfig) -> Self {
        Self { router, presence }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        let own_id = ctx.cache.current_user().id.to_string();
        let chat = DiscordService::new(ctx.http.clone(), msg.channel_id, own_id);

        if let Err(e) = self
            .router
            .route(&chat, &msg.content, &msg.author.id.to_string())
            .await
        {
            tracing::error!("Failed to route message: {}", e);
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!("Connected to Discord as {}", ready.user.name);
        ctx.set_activity(Some(streaming_activity(
            &self.presence.text,
            &self.presence.url,
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{EmbedAuthor, EmbedField};

    #[test]
    fn test_build_embed_fields() {
        let embed = Embed {
            author: Some(EmbedAuthor {
                name: "The Cheesy Poofs (254)".to_string(),
                url: Some("http://www.team254.com".to_string()),
            }),
            description: Some("Info for team frc254:".to_string()),
            fields: vec![EmbedField::new("Motto", "No motto found", false)],
            color: Some(14490723),
            footer: Some("Info provided by The Blue Alliance".to_string()),
        };

        let json = serde_json::to_value(build_embed(&embed)).unwrap();
        assert_eq!(json["author"]["name"], "The Cheesy Poofs (254)");
        assert_eq!(json["author"]["url"], "http://www.team254.com");
        assert_eq!(json["description"], "Info for team frc254:");
        assert_eq!(json["color"], 14490723);
        assert_eq!(json["fields"][0]["name"], "Motto");
        assert_eq!(json["fields"][0]["value"], "No motto found");
        assert_eq!(json["fields"][0]["inline"], false);
        assert_eq!(json["footer"]["text"], "Info provided by The Blue Alliance");
    }

    #[test]
    fn test_build_embed_minimal() {
        let json = serde_json::to_value(build_embed(&Embed::default())).unwrap();
        assert!(json["author"].is_null());
        assert!(json["footer"].is_null());
    }
}
