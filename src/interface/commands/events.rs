//! # Events Command
//!
//! Handles `~!events <team #> [event #]`.
//! Without an index it lists the team's events; with one it shows the team's
//! qualification and playoff record at that event.

use crate::application::embeds;
use crate::domain::traits::StatsProvider;
use crate::domain::types::Reply;

pub async fn handle_events(stats: &dyn StatsProvider, args: &[&str]) -> Reply {
    let Some(team_key) = super::team_arg(args) else {
        return Reply::Suppress;
    };

    // Reject a malformed index before any lookup.
    let index = match args.get(1) {
        Some(raw) => match raw.parse::<usize>() {
            Ok(i) => Some(i),
            Err(e) => {
                tracing::debug!("Ignoring invalid event index '{}': {}", raw, e);
                return Reply::Suppress;
            }
        },
        None => None,
    };

    let (team, events) = tokio::join!(
        stats.fetch_team(team_key),
        stats.fetch_team_events(team_key)
    );
    let (Some(team), Some(events)) = (team, events) else {
        return Reply::Suppress;
    };

    let Some(index) = index else {
        return Reply::Embed(embeds::format_event_list(&team, &events));
    };

    let Some(event) = events.get(index) else {
        tracing::debug!(
            "Event index {} out of range for {} ({} events)",
            index,
            team_key,
            events.len()
        );
        return Reply::Suppress;
    };

    match stats.fetch_event_status(team_key, &event.key).await {
        Some(status) => Reply::Embed(embeds::format_event_status(&team, event, &status)),
        None => Reply::Suppress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::EventStatus;
    use crate::test_support::FakeStats;

    #[tokio::test]
    async fn test_events_list() {
        let stats = FakeStats::poofs();
        let Reply::Embed(embed) = handle_events(&stats, &["254"]).await else {
            panic!("expected an embed");
        };
        let description = embed.description.unwrap();
        assert!(description.contains("0. <Silicon Valley Regional (2019)>"));
        assert!(description.contains("1. <Chezy Champs (2019)>"));
        assert_eq!(stats.calls(), 2);
    }

    #[tokio::test]
    async fn test_event_status() {
        let stats = FakeStats::poofs();
        let Reply::Embed(embed) = handle_events(&stats, &["254", "0"]).await else {
            panic!("expected an embed");
        };
        let playoffs = embed.fields.iter().find(|f| f.name == "Playoffs").unwrap();
        assert_eq!(playoffs.value, "Team did not make it to playoffs");
        assert_eq!(stats.calls(), 3);
    }

    #[tokio::test]
    async fn test_event_without_status_data() {
        let mut stats = FakeStats::poofs();
        // An upcoming event: TBA has no status record for the team yet.
        stats.statuses.insert(
            ("254".to_string(), "2019cc".to_string()),
            EventStatus::default(),
        );

        let Reply::Embed(embed) = handle_events(&stats, &["254", "1"]).await else {
            panic!("expected an embed");
        };
        let value = |name: &str| {
            embed
                .fields
                .iter()
                .find(|f| f.name == name)
                .map(|f| f.value.clone())
                .unwrap()
        };
        assert_eq!(value("Event"), "Chezy Champs (2019)");
        assert_eq!(value("Location"), "Unknown");
        assert_eq!(value("Qualifiers"), "No qualification data");
        assert_eq!(value("Playoffs"), "Team did not make it to playoffs");
        assert_eq!(stats.calls(), 3);
    }

    #[tokio::test]
    async fn test_event_index_out_of_range() {
        let stats = FakeStats::poofs();
        assert_eq!(handle_events(&stats, &["254", "2"]).await, Reply::Suppress);
        // No status lookup for an index that does not exist.
        assert_eq!(stats.calls(), 2);
    }

    #[tokio::test]
    async fn test_event_index_malformed() {
        let stats = FakeStats::poofs();
        assert_eq!(handle_events(&stats, &["254", "-1"]).await, Reply::Suppress);
        assert_eq!(handle_events(&stats, &["254", "first"]).await, Reply::Suppress);
        assert_eq!(stats.calls(), 0);
    }

    #[tokio::test]
    async fn test_event_status_missing() {
        let stats = FakeStats::poofs();
        // No canned status for the second event.
        assert_eq!(handle_events(&stats, &["254", "1"]).await, Reply::Suppress);
    }
}
