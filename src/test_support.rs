//! In-memory fakes for the domain traits.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::traits::{ChatProvider, PresenceProvider, StatsProvider};
use crate::domain::types::{Award, Embed, Event, EventRankings, EventStatus, Team};

pub const BOT_ID: &str = "1000";
pub const USER_ID: &str = "2000";

/// Canned TBA data keyed by the raw team argument. Counts every lookup.
#[derive(Default)]
pub struct FakeStats {
    pub teams: HashMap<String, Team>,
    pub awards: HashMap<String, Vec<Award>>,
    pub events: HashMap<String, Vec<Event>>,
    pub statuses: HashMap<(String, String), EventStatus>,
    calls: AtomicUsize,
}

impl FakeStats {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    /// Team 254 with awards, two events and a status for the first one.
    pub fn poofs() -> Self {
        let mut stats = Self::default();
        stats.teams.insert(
            "254".to_string(),
            Team {
                key: "frc254".to_string(),
                team_number: 254,
                nickname: "The Cheesy Poofs".to_string(),
                name: "NASA Ames Research Center".to_string(),
                city: "San Jose".to_string(),
                state_prov: "California".to_string(),
                country: "USA".to_string(),
                website: Some("http://www.team254.com".to_string()),
                rookie_year: 1999,
                motto: Some(String::new()),
                ..Team::default()
            },
        );
        stats.awards.insert(
            "254".to_string(),
            vec![
                Award {
                    name: "Regional Winners".to_string(),
                    year: 2019,
                    event_key: "2019casj".to_string(),
                    ..Award::default()
                },
                Award {
                    name: "Championship Winners".to_string(),
                    year: 2018,
                    event_key: "2018cmptx".to_string(),
                    ..Award::default()
                },
            ],
        );
        stats.events.insert(
            "254".to_string(),
            vec![
                Event {
                    key: "2019casj".to_string(),
                    name: "Silicon Valley Regional".to_string(),
                    year: 2019,
                    city: "San Jose".to_string(),
                    state_prov: "CA".to_string(),
                    country: "USA".to_string(),
                    ..Event::default()
                },
                Event {
                    key: "2019cc".to_string(),
                    name: "Chezy Champs".to_string(),
                    year: 2019,
                    ..Event::default()
                },
            ],
        );
        stats.statuses.insert(
            ("254".to_string(), "2019casj".to_string()),
            EventStatus::default(),
        );
        stats
    }
}

#[async_trait]
impl StatsProvider for FakeStats {
    async fn fetch_team(&self, team_key: &str) -> Option<Team> {
        self.hit();
        self.teams.get(team_key).cloned()
    }

    async fn fetch_team_awards(&self, team_key: &str) -> Option<Vec<Award>> {
        self.hit();
        self.awards.get(team_key).cloned()
    }

    async fn fetch_team_events(&self, team_key: &str) -> Option<Vec<Event>> {
        self.hit();
        self.events.get(team_key).cloned()
    }

    async fn fetch_event_status(&self, team_key: &str, event_key: &str) -> Option<EventStatus> {
        self.hit();
        self.statuses
            .get(&(team_key.to_string(), event_key.to_string()))
            .cloned()
    }

    async fn fetch_event_rankings(&self, _event_key: &str) -> Option<EventRankings> {
        self.hit();
        None
    }
}

/// Records every embed sent.
#[derive(Default)]
pub struct FakeChat {
    pub sent: Mutex<Vec<Embed>>,
    pub fail: bool,
}

impl FakeChat {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Embed> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for FakeChat {
    async fn send_embed(&self, embed: &Embed) -> Result<String, String> {
        if self.fail {
            return Err("channel unavailable".to_string());
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(embed.clone());
        Ok(sent.len().to_string())
    }

    fn channel_id(&self) -> String {
        "3000".to_string()
    }

    fn own_user_id(&self) -> String {
        BOT_ID.to_string()
    }
}

/// Counts presence updates.
#[derive(Default)]
pub struct FakePresence {
    updates: AtomicUsize,
}

impl FakePresence {
    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PresenceProvider for FakePresence {
    async fn set_streaming(&self, _text: &str, _url: &str) -> Result<(), String> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
