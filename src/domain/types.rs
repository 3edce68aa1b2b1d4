#![allow(dead_code)]
//! # Domain Types
//!
//! Read-only projections of The Blue Alliance payloads, plus the
//! platform-neutral display structure handed to the chat layer.
//!
//! Every remote field is `#[serde(default)]`: TBA omits or nulls fields freely
//! and a missing value must decode to its zero value, not fail the whole record.

use serde::{Deserialize, Deserializer};
use std::fmt;

/// Deserialize `null` as the type's default, same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Validated team number.
///
/// Only non-empty strings of ASCII digits that fit in a `u32` are accepted,
/// so signs and whitespace are rejected before any path is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamKey(u32);

impl TeamKey {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse().ok().map(Self)
    }

    pub fn number(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frc{}", self.number())
    }
}

/// `GET /team/{team_key}`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Team {
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub team_number: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub nickname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state_prov: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub location_name: Option<String>,
    pub website: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub rookie_year: u16,
    pub motto: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AwardRecipient {
    pub team_key: Option<String>,
    pub awardee: Option<String>,
}

/// One element of `GET /team/{team_key}/awards`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Award {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub award_type: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub event_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub recipient_list: Vec<AwardRecipient>,
    #[serde(deserialize_with = "null_as_default")]
    pub year: u16,
}

/// One element of `GET /team/{team_key}/events/simple`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Event {
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub event_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub event_type: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state_prov: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub year: u16,
}

/// Win-loss-tie counts.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WltRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub wins: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub losses: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub ties: u32,
}

impl fmt::Display for WltRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.wins, self.losses, self.ties)
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct QualRanking {
    #[serde(deserialize_with = "null_as_default")]
    pub rank: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub record: WltRecord,
    pub matches_played: Option<u32>,
    pub team_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct QualStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub num_teams: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub ranking: QualRanking,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayoffStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub level: String,
    #[serde(deserialize_with = "null_as_default")]
    pub record: WltRecord,
    pub status: Option<String>,
}

/// `GET /team/{team_key}/event/{event_key}/status`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct EventStatus {
    pub qual: Option<QualStatus>,
    pub playoff: Option<PlayoffStatus>,
    pub overall_status_str: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct EventRanking {
    #[serde(deserialize_with = "null_as_default")]
    pub rank: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub team_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub record: WltRecord,
    #[serde(deserialize_with = "null_as_default")]
    pub matches_played: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub dq: u32,
}

/// `GET /event/{event_key}/rankings`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct EventRankings {
    #[serde(deserialize_with = "null_as_default")]
    pub rankings: Vec<EventRanking>,
}

/// Platform-neutral embed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Embed {
    pub author: Option<EmbedAuthor>,
    pub description: Option<String>,
    pub fields: Vec<EmbedField>,
    pub color: Option<u32>,
    pub footer: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedAuthor {
    pub name: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

/// Outcome of a command handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Embed(Embed),
    /// Nothing to render; the router sends nothing.
    Suppress,
}

impl From<Option<Embed>> for Reply {
    fn from(embed: Option<Embed>) -> Self {
        embed.map_or(Reply::Suppress, Reply::Embed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_key_parse() {
        assert_eq!(TeamKey::parse("254").map(|k| k.number()), Some(254));
        assert_eq!(TeamKey::parse("0").map(|k| k.number()), Some(0));
        assert_eq!(TeamKey::parse("254").unwrap().to_string(), "frc254");

        assert!(TeamKey::parse("").is_none());
        assert!(TeamKey::parse("abc").is_none());
        assert!(TeamKey::parse("-1").is_none());
        assert!(TeamKey::parse("+5").is_none());
        assert!(TeamKey::parse("12a").is_none());
        assert!(TeamKey::parse(" 254").is_none());
        assert!(TeamKey::parse("99999999999").is_none());
    }

    #[test]
    fn test_team_missing_and_null_fields() {
        let team: Team = serde_json::from_str(
            r#"{"key":"frc254","team_number":254,"nickname":"The Cheesy Poofs","motto":null,"city":null}"#,
        )
        .unwrap();

        assert_eq!(team.team_number, 254);
        assert_eq!(team.nickname, "The Cheesy Poofs");
        assert_eq!(team.city, "");
        assert_eq!(team.motto, None);
        assert_eq!(team.website, None);
        assert_eq!(team.rookie_year, 0);
    }

    #[test]
    fn test_event_status_without_playoff() {
        let status: EventStatus = serde_json::from_str(
            r#"{
                "qual": {"num_teams": 40, "ranking": {"rank": 3, "record": {"wins": 8, "losses": 2, "ties": 0}}},
                "playoff": null,
                "overall_status_str": "Team 254 was Rank 3/40"
            }"#,
        )
        .unwrap();

        let qual = status.qual.unwrap();
        assert_eq!(qual.num_teams, 40);
        assert_eq!(qual.ranking.rank, 3);
        assert_eq!(qual.ranking.record.to_string(), "8-2-0");
        assert!(status.playoff.is_none());
    }

    #[test]
    fn test_reply_from_option() {
        assert_eq!(Reply::from(None), Reply::Suppress);
        assert!(matches!(Reply::from(Some(Embed::default())), Reply::Embed(_)));
    }
}
