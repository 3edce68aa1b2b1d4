//! # Awards Command
//!
//! Handles `~!awards <team #>`: every award the team has won, grouped by year.

use crate::application::embeds;
use crate::domain::traits::StatsProvider;
use crate::domain::types::Reply;

pub async fn handle_awards(stats: &dyn StatsProvider, args: &[&str]) -> Reply {
    let Some(team_key) = super::team_arg(args) else {
        return Reply::Suppress;
    };

    let (awards, team) = tokio::join!(
        stats.fetch_team_awards(team_key),
        stats.fetch_team(team_key)
    );

    match (team, awards) {
        (Some(team), Some(awards)) => Reply::Embed(embeds::format_awards(&team, &awards)),
        _ => Reply::Suppress,
    }
}
