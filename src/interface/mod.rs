//! # Interface Layer
//!
//! Entry points invoked by the router, one per user-facing command.

pub mod commands;
