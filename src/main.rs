//! # Main Entry Point
//!
//! Wires the bot together:
//! - Domain: Configuration and Types
//! - Infrastructure: Discord, The Blue Alliance
//! - Application: Router, Embeds, Presence
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use clap::Parser;
use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;

use crate::application::presence::PresenceTask;
use crate::application::router::CommandRouter;
use crate::domain::config::{AppConfig, Cli};
use crate::domain::traits::StatsProvider;
use crate::infrastructure::discord::{DiscordPresence, Handler};
use crate::infrastructure::tba::TbaClient;
use crate::strings::logs;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load Configuration
    let config = AppConfig::from_cli(Cli::parse());

    // 2. Logging Setup
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new("info,serenity=warn,tracing=warn,hyper=warn,reqwest=warn")
    });

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .init();

    tracing::info!("{}", logs::STARTING);

    // 3. Initialize Application Components
    let stats: Arc<dyn StatsProvider> = Arc::new(
        TbaClient::new(&config.services.tba).context("Failed to create HTTP client")?,
    );
    let router = Arc::new(CommandRouter::new(config.clone(), stats));

    // 4. Discord Setup
    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.services.discord.token, intents)
        .event_handler(Handler::new(router, config.presence.clone()))
        .await
        .context("Error creating Discord client")?;

    let shard_manager = client.shard_manager.clone();

    // 5. Start Loops
    let presence = PresenceTask::spawn(
        Arc::new(DiscordPresence::new(shard_manager.clone())),
        config.presence.clone(),
    );

    let mut gateway = tokio::spawn(async move { client.start().await });

    tracing::info!("{}", logs::RUNNING);

    // 6. Wait for a termination signal (or the gateway giving up)
    let finished = tokio::select! {
        res = shutdown_signal() => {
            if let Err(e) = res {
                tracing::error!("{}", logs::shutdown_fail(&e.to_string()));
            }
            None
        }
        res = &mut gateway => Some(res),
    };

    tracing::info!("{}", logs::SHUTDOWN);
    presence.shutdown().await;

    match finished {
        Some(Ok(res)) => res.context("Discord connection closed"),
        Some(Err(e)) => Err(e).context("Discord client task panicked"),
        None => {
            shard_manager.shutdown_all().await;
            match gateway.await {
                Ok(Err(e)) => tracing::error!("{}", logs::gateway_fail(&e.to_string())),
                Err(e) => tracing::error!("Discord client task panicked: {}", e),
                Ok(Ok(())) => {}
            }
            Ok(())
        }
    }
}

async fn shutdown_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            res = tokio::signal::ctrl_c() => res,
            _ = terminate.recv() => Ok(()),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await
    }
}
