//! # Embed Formatter
//!
//! Turns fetched TBA records into bounded `Embed`s.
//! Handles title fallback, placeholder substitution for missing fields, year grouping of awards,
//! and the character budgets Discord enforces on each embed part.

use std::collections::BTreeMap;

use crate::domain::types::{
    Award, Embed, EmbedAuthor, EmbedField, Event, EventStatus, PlayoffStatus, QualStatus, Team,
};
use crate::strings::{help, messages};

/// Hard limit for the author line built from team names.
pub const TITLE_LIMIT: usize = 40;
pub const AUTHOR_LIMIT: usize = 256;
pub const DESCRIPTION_LIMIT: usize = 4096;
pub const FIELD_LIMIT: usize = 1024;

const ELLIPSIS: char = '…';

/// Pick the first of `"<nickname> (<n>)"`, `"<name> (<n>)"`, `"Team <n>"` that fits in `TITLE_LIMIT` chars.
pub fn team_title(team: &Team) -> String {
    let number = team.team_number;
    [team.nickname.trim(), team.name.trim()]
        .into_iter()
        .filter(|label| !label.is_empty())
        .map(|label| format!("{label} ({number})"))
        .find(|title| title.chars().count() <= TITLE_LIMIT)
        .unwrap_or_else(|| format!("Team {number}"))
}

/// Cut `text` to at most `limit` chars, marking the cut with an ellipsis.
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut out: String = text.chars().take(limit.saturating_sub(1)).collect();
    out.push(ELLIPSIS);
    out
}

pub fn or_placeholder(value: &str, placeholder: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// `"<city>, <state> <country>"` with empty parts dropped.
pub fn location(city: &str, state_prov: &str, country: &str) -> String {
    let region = [state_prov.trim(), country.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let parts: Vec<&str> = [city.trim(), region.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if parts.is_empty() {
        messages::UNKNOWN.to_string()
    } else {
        parts.join(", ")
    }
}

/// Append whole blocks after `header` while they fit in `limit` chars.
/// Blocks that do not fit are summarised by a trailing count instead of being cut mid-way.
fn fit_blocks(header: &str, blocks: &[String], limit: usize) -> String {
    let mut out = header.to_string();
    let mut used = out.chars().count();

    for (i, block) in blocks.iter().enumerate() {
        let remaining = blocks.len() - i;
        let len = block.chars().count();
        let reserve = if remaining > 1 {
            more_note(remaining - 1).chars().count()
        } else {
            0
        };
        if used + len + reserve > limit {
            let note = more_note(remaining);
            if used + note.chars().count() <= limit {
                out.push_str(&note);
            }
            return out;
        }
        out.push_str(block);
        used += len;
    }
    out
}

fn more_note(count: usize) -> String {
    format!("\n{ELLIPSIS} and {count} more")
}

fn field(name: &str, value: &str, inline: bool) -> EmbedField {
    EmbedField::new(name, truncate(value, FIELD_LIMIT), inline)
}

/// Embed skeleton shared by every team view.
/// Discord rejects author links without an http(s) scheme, so those are dropped.
fn team_embed(team: &Team, description: String) -> Embed {
    Embed {
        author: Some(EmbedAuthor {
            name: truncate(&team_title(team), AUTHOR_LIMIT),
            url: team
                .website
                .as_deref()
                .map(str::trim)
                .filter(|url| url.starts_with("http://") || url.starts_with("https://"))
                .map(str::to_string),
        }),
        description: Some(truncate(&description, DESCRIPTION_LIMIT)),
        fields: Vec::new(),
        color: Some(messages::EMBED_COLOR),
        footer: Some(messages::FOOTER.to_string()),
    }
}

fn team_summary(team: &Team) -> String {
    messages::team_summary(
        &or_placeholder(&team.name, messages::UNKNOWN),
        &or_placeholder(&team.nickname, messages::UNKNOWN),
    )
}

pub fn format_help() -> Embed {
    Embed {
        author: Some(EmbedAuthor {
            name: help::AUTHOR.to_string(),
            url: Some(crate::domain::config::PROJECT_URL.to_string()),
        }),
        description: Some(help::DESCRIPTION.to_string()),
        fields: help::COMMANDS
            .iter()
            .map(|(name, usage)| field(name, usage, false))
            .collect(),
        color: Some(messages::EMBED_COLOR),
        footer: None,
    }
}

/// `None` when the record carries nothing to show.
pub fn format_team(team: &Team) -> Option<Embed> {
    if team.key.is_empty() && team.team_number == 0 {
        return None;
    }

    let key = if team.key.is_empty() {
        format!("frc{}", team.team_number)
    } else {
        team.key.clone()
    };
    let rookie_year = match team.rookie_year {
        0 => messages::UNKNOWN.to_string(),
        year => year.to_string(),
    };

    let mut embed = team_embed(team, messages::team_info_header(&key));
    embed.fields = vec![
        field("Name", &or_placeholder(&team.name, messages::UNKNOWN), false),
        field(
            "Nickname",
            &or_placeholder(&team.nickname, messages::UNKNOWN),
            false,
        ),
        field(
            "Motto",
            &or_placeholder(team.motto.as_deref().unwrap_or(""), messages::NO_MOTTO),
            false,
        ),
        field("Rookie Year", &rookie_year, false),
        field(
            "Location",
            &location(&team.city, &team.state_prov, &team.country),
            false,
        ),
    ];
    Some(embed)
}

/// Award names keyed by year, ascending. Order within a year follows the input.
pub fn group_awards_by_year(awards: &[Award]) -> BTreeMap<u16, Vec<&str>> {
    let mut years: BTreeMap<u16, Vec<&str>> = BTreeMap::new();
    for award in awards {
        years.entry(award.year).or_default().push(award.name.as_str());
    }
    years
}

pub fn format_awards(team: &Team, awards: &[Award]) -> Embed {
    let blocks: Vec<String> = group_awards_by_year(awards)
        .into_iter()
        .map(|(year, names)| {
            let mut block = format!("\n{year}:\n");
            for name in names {
                block.push('\t');
                block.push_str(&or_placeholder(name, messages::UNKNOWN));
                block.push('\n');
            }
            block
        })
        .collect();

    let description = if blocks.is_empty() {
        messages::NO_AWARDS.to_string()
    } else {
        fit_blocks("", &blocks, DESCRIPTION_LIMIT)
    };
    team_embed(team, description)
}

fn event_label(event: &Event) -> String {
    format!(
        "{} ({})",
        or_placeholder(&event.name, messages::UNKNOWN),
        event.year
    )
}

/// Indexed listing, so users can pick the `[event #]` argument.
pub fn format_event_list(team: &Team, events: &[Event]) -> Embed {
    let header = team_summary(team);
    let description = if events.is_empty() {
        format!("{header}\n{}", messages::NO_EVENTS)
    } else {
        let blocks: Vec<String> = events
            .iter()
            .enumerate()
            .map(|(i, event)| {
                format!(
                    "\n```md\n{}. <{}>\n\t{}```",
                    i,
                    event_label(event),
                    location(&event.city, &event.state_prov, &event.country)
                )
            })
            .collect();
        fit_blocks(&header, &blocks, DESCRIPTION_LIMIT)
    };
    team_embed(team, description)
}

fn playoff_level(level: &str) -> String {
    match level {
        "ef" => "Octofinals".to_string(),
        "qf" => "Quarterfinals".to_string(),
        "sf" => "Semifinals".to_string(),
        "f" => "Finals".to_string(),
        other => or_placeholder(other, messages::UNKNOWN),
    }
}

fn qual_summary(qual: Option<&QualStatus>) -> String {
    match qual {
        Some(q) => format!(
            "{}/{}\n{}",
            q.ranking.rank,
            q.num_teams,
            messages::record_line(&q.ranking.record.to_string())
        ),
        None => messages::NO_QUALS.to_string(),
    }
}

fn playoff_summary(playoff: Option<&PlayoffStatus>) -> String {
    match playoff {
        Some(p) if *p != PlayoffStatus::default() => format!(
            "Level: {}\n{}",
            playoff_level(&p.level),
            messages::record_line(&p.record.to_string())
        ),
        _ => messages::NO_PLAYOFFS.to_string(),
    }
}

/// TBA's one-line summary with its `<b>` markup turned into Markdown bold.
fn overall_status(status: &EventStatus) -> Option<String> {
    let raw = status.overall_status_str.as_deref()?.trim();
    if raw.is_empty() {
        return None;
    }
    Some(raw.replace("<b>", "**").replace("</b>", "**"))
}

pub fn format_event_status(team: &Team, event: &Event, status: &EventStatus) -> Embed {
    let dates = [event.start_date.trim(), event.end_date.trim()]
        .into_iter()
        .filter(|d| !d.is_empty())
        .collect::<Vec<_>>()
        .join(" - ");

    let mut description = format!("{}Team event info:\n", team_summary(team));
    if let Some(line) = overall_status(status) {
        description.push_str(&line);
        description.push('\n');
    }

    let mut embed = team_embed(team, description);
    embed.fields = vec![
        field("Event", &event_label(event), true),
        field(
            "Location",
            &location(&event.city, &event.state_prov, &event.country),
            true,
        ),
        field("Date", &or_placeholder(&dates, messages::UNKNOWN), true),
        field("Qualifiers", &qual_summary(status.qual.as_ref()), false),
        field("Playoffs", &playoff_summary(status.playoff.as_ref()), false),
    ];
    embed
}
