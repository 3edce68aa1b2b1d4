//! # Configuration
//!
//! Builds the application's configuration from the command line.
//! Only the two secrets are exposed as flags; everything else carries a fixed default.

use clap::Parser;
use std::time::Duration;

pub const DEFAULT_PREFIX: &str = "~!";
pub const DEFAULT_TBA_BASE_URL: &str = "https://www.thebluealliance.com/api/v3";
pub const DEFAULT_PRESENCE_INTERVAL_SECS: u64 = 180;
pub const DEFAULT_PRESENCE_TEXT: &str = "for Team 6657";
pub const PROJECT_URL: &str = "http://github.com/team6657/frchan";

/// Startup secrets, read from flags or the environment.
#[derive(Debug, Parser)]
#[command(name = "frchan", about = "Discord bot for The Blue Alliance FRC statistics")]
pub struct Cli {
    /// Discord bot token
    #[arg(long = "bot", env = "FRCHAN_BOT_TOKEN", hide_env_values = true)]
    pub bot_token: String,

    /// The Blue Alliance read API key
    #[arg(long = "tba", env = "FRCHAN_TBA_KEY", hide_env_values = true)]
    pub tba_key: String,
}

/// Main application configuration structure.
/// Constructed once in `main` and handed to every component that needs it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    pub commands: CommandsConfig,
    pub presence: PresenceConfig,
}

/// Configuration for the connected services.
#[derive(Debug, Clone)]
pub struct ServicesConfig {
    pub discord: DiscordConfig,
    pub tba: TbaConfig,
}

#[derive(Debug, Clone)]
pub struct DiscordConfig {
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct TbaConfig {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct CommandsConfig {
    pub prefix: String,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

/// Settings for the periodic status refresh.
#[derive(Debug, Clone)]
pub struct PresenceConfig {
    pub interval: Duration,
    pub text: String,
    pub url: String,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_PRESENCE_INTERVAL_SECS),
            text: DEFAULT_PRESENCE_TEXT.to_string(),
            url: PROJECT_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Self {
        Self::new(cli.bot_token, cli.tba_key)
    }

    pub fn new(bot_token: impl Into<String>, tba_key: impl Into<String>) -> Self {
        Self {
            services: ServicesConfig {
                discord: DiscordConfig {
                    token: bot_token.into(),
                },
                tba: TbaConfig {
                    api_key: tba_key.into(),
                    base_url: DEFAULT_TBA_BASE_URL.to_string(),
                },
            },
            commands: CommandsConfig::default(),
            presence: PresenceConfig::default(),
        }
    }
}
