//! # Team Command
//!
//! Handles `~!team <team #>`.

use crate::application::embeds;
use crate::domain::traits::StatsProvider;
use crate::domain::types::Reply;

pub async fn handle_team(stats: &dyn StatsProvider, args: &[&str]) -> Reply {
    let Some(team_key) = super::team_arg(args) else {
        return Reply::Suppress;
    };

    stats
        .fetch_team(team_key)
        .await
        .as_ref()
        .and_then(embeds::format_team)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeStats;

    #[tokio::test]
    async fn test_team_found() {
        let stats = FakeStats::poofs();
        let Reply::Embed(embed) = handle_team(&stats, &["254"]).await else {
            panic!("expected an embed");
        };
        assert_eq!(embed.author.unwrap().name, "The Cheesy Poofs (254)");
        let motto = embed.fields.iter().find(|f| f.name == "Motto").unwrap();
        assert_eq!(motto.value, "No motto found");
    }

    #[tokio::test]
    async fn test_team_invalid_key_skips_fetch() {
        let stats = FakeStats::poofs();
        assert_eq!(handle_team(&stats, &["abc"]).await, Reply::Suppress);
        assert_eq!(handle_team(&stats, &[]).await, Reply::Suppress);
        assert_eq!(stats.calls(), 0);
    }

    #[tokio::test]
    async fn test_team_missing() {
        let stats = FakeStats::poofs();
        assert_eq!(handle_team(&stats, &["9999"]).await, Reply::Suppress);
        assert_eq!(stats.calls(), 1);
    }
}
