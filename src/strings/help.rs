//! # Help Text
//!
//! Usage blocks for each bot command.
//! Displayed to the user via the `~!help` command.

pub const AUTHOR: &str = "FRChan Help Guide";
pub const DESCRIPTION: &str = "List of commands for FRChan:\n";

/// (command, usage block) in display order.
pub const COMMANDS: [(&str, &str); 4] = [
    (
        "help",
        concat!("```md\n", "# Displays this page\n", "< usage: >\n", "\t~!help\n", "```"),
    ),
    (
        "team",
        concat!("```md\n", "# Displays FRC team info\n", "< usage: >\n", "\t~!team <team #>\n", "```"),
    ),
    (
        "awards",
        concat!(
            "```md\n",
            "# Displays FRC team awards in competitions over the years\n",
            "< usage: >\n",
            "\t~!awards <team #>\n",
            "```"
        ),
    ),
    (
        "events",
        concat!(
            "```md\n",
            "# Displays FRC team rankings in events\n",
            "< usage: >\n",
            "\t~!events <team #> [event #]\n",
            "```"
        ),
    ),
];
