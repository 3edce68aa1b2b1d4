//! # Command Handlers
//!
//! Contains specific handler functions for each supported command (help, team, awards, events).
//! These handlers are invoked by the Router. Each one returns a `Reply`; a handler never
//! sends anything itself, and every failure comes back as `Reply::Suppress`.

pub mod awards;
pub mod events;
pub mod help;
pub mod team;

use crate::domain::types::TeamKey;

/// First positional argument, when it is a usable team number.
fn team_arg<'a>(args: &[&'a str]) -> Option<&'a str> {
    let raw = args.first().copied()?;
    if TeamKey::parse(raw).is_none() {
        tracing::debug!("Ignoring invalid team number '{}'", raw);
        return None;
    }
    Some(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_arg() {
        assert_eq!(team_arg(&["254"]), Some("254"));
        assert_eq!(team_arg(&["254", "3"]), Some("254"));
        assert_eq!(team_arg(&[]), None);
        assert_eq!(team_arg(&["abc"]), None);
    }
}
