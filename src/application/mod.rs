//! # Application Layer
//!
//! Contains the core logic and orchestration of the bot.
//! This includes command routing, embed formatting, and the presence refresher.

pub mod embeds;
pub mod presence;
pub mod router;
