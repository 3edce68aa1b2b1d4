//! # Help Command
//!
//! Handles the `~!help` command.
//! Static content, no remote call.

use crate::application::embeds;
use crate::domain::types::Reply;

pub fn handle_help() -> Reply {
    Reply::Embed(embeds::format_help())
}
