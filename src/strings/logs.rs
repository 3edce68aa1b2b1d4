//! # Log Messages
//!
//! Operator-facing lines written to the console during startup and shutdown.

pub const STARTING: &str = "Starting FRChan...";
pub const RUNNING: &str = "Bot now running. Press CTRL+C to exit.";
pub const SHUTDOWN: &str = "Shutting down...";

pub fn shutdown_fail(err: &str) -> String {
    format!("Unable to listen for shutdown signal: {err}")
}

pub fn gateway_fail(err: &str) -> String {
    format!("Discord connection failed: {err}")
}
