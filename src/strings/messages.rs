//! # Messages
//!
//! Placeholder phrases and fixed decoration used when rendering embeds.

pub const FOOTER: &str = "Info provided by The Blue Alliance";
pub const EMBED_COLOR: u32 = 14490723;

pub const NO_MOTTO: &str = "No motto found";
pub const UNKNOWN: &str = "Unknown";
pub const NO_AWARDS: &str = "No awards found";
pub const NO_EVENTS: &str = "No events found";
pub const NO_PLAYOFFS: &str = "Team did not make it to playoffs";
pub const NO_QUALS: &str = "No qualification data";

pub fn team_info_header(key: &str) -> String {
    format!("\nInfo for team {key}:\n")
}

pub fn team_summary(name: &str, nickname: &str) -> String {
    format!("{name}\nNick: {nickname}\n")
}

pub fn record_line(record: &str) -> String {
    format!("W-L-T:\t{record}")
}
