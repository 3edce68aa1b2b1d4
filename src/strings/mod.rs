//! # Strings Module
//!
//! Centralizes user-facing and operator-facing strings: help text, placeholders,
//! embed decoration and log lines.

pub mod help;
pub mod logs;
pub mod messages;
