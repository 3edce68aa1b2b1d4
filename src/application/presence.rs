//! # Presence Task
//!
//! Periodically refreshes the bot's streaming status.
//! Runs on its own schedule, shares nothing with command handling, and is joined on
//! shutdown so that no tick can start once `shutdown` has returned.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::domain::config::PresenceConfig;
use crate::domain::traits::PresenceProvider;

pub struct PresenceTask {
    stop: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl PresenceTask {
    pub fn spawn(provider: Arc<dyn PresenceProvider>, config: PresenceConfig) -> Self {
        let (stop, mut stopped) = watch::channel(false);

        let handle = tokio::spawn(async move {
            // First tick fires one full period after start; `ready` sets the initial status.
            let start = tokio::time::Instant::now() + config.interval;
            let mut ticker = tokio::time::interval_at(start, config.interval.max(Duration::from_millis(1)));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = stopped.changed() => break,
                    _ = ticker.tick() => {
                        if let Err(e) = provider.set_streaming(&config.text, &config.url).await {
                            tracing::warn!("Error setting bot status: {}", e);
                        }
                    }
                }
            }
            tracing::debug!("Presence task stopped");
        });

        Self { stop, handle }
    }

    /// Signal the task and wait for it to finish its current tick.
    pub async fn shutdown(self) {
        let _ = self.stop.send(true);
        if let Err(e) = self.handle.await {
            tracing::error!("Presence task panicked: {}", e);
        }
    }
}
