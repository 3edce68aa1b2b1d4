//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! It parses the command string (e.g., `~!team 254`), dispatches it, and sends back
//! at most one embed. Anything unrecognised or unanswerable is dropped silently.

use anyhow::Result;
use std::sync::Arc;

use crate::domain::config::AppConfig;
use crate::domain::traits::{ChatProvider, StatsProvider};
use crate::domain::types::Reply;
use crate::interface::commands;

/// Split a prefixed message into the command name and its positional arguments.
pub fn parse_command<'a>(prefix: &str, message: &'a str) -> Option<(&'a str, Vec<&'a str>)> {
    let rest = message.strip_prefix(prefix)?;
    let mut tokens = rest.split_whitespace();
    let cmd = tokens.next()?;
    Some((cmd, tokens.collect()))
}

pub struct CommandRouter {
    config: AppConfig,
    stats: Arc<dyn StatsProvider>,
}

impl CommandRouter {
    pub fn new(config: AppConfig, stats: Arc<dyn StatsProvider>) -> Self {
        Self { config, stats }
    }

    pub async fn route<C>(&self, chat: &C, message: &str, sender: &str) -> Result<()>
    where
        C: ChatProvider + ?Sized,
    {
        if sender == chat.own_user_id() {
            return Ok(());
        }

        let Some((cmd, args)) = parse_command(&self.config.commands.prefix, message) else {
            return Ok(());
        };

        tracing::info!(
            "Router dispatching cmd='{}' args='{}' sender='{}' channel='{}'",
            cmd,
            args.join(" "),
            sender,
            chat.channel_id()
        );

        match self.dispatch(cmd, &args).await {
            Reply::Embed(embed) => {
                chat.send_embed(&embed)
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to send reply to {}: {}", chat.channel_id(), e))?;
            }
            Reply::Suppress => {
                tracing::debug!("No reply for cmd='{}'", cmd);
            }
        }
        Ok(())
    }

    pub async fn dispatch(&self, cmd: &str, args: &[&str]) -> Reply {
        let stats = self.stats.as_ref();
        match cmd {
            "help" => commands::help::handle_help(),
            "team" => commands::team::handle_team(stats, args).await,
            "awards" => commands::awards::handle_awards(stats, args).await,
            "events" => commands::events::handle_events(stats, args).await,
            _ => Reply::Suppress,
        }
    }
}
