//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (ChatProvider, StatsProvider, PresenceProvider).

pub mod discord;
pub mod tba;
