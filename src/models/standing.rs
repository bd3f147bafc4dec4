//! One row of the standings table.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// A player's current record. Standings lists are ordered by `wins` descending.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    /// Matches played, won or lost.
    pub matches: u32,
}

impl StandingEntry {
    pub fn new(player_id: PlayerId, name: impl Into<String>, wins: u32, matches: u32) -> Self {
        Self {
            player_id,
            name: name.into(),
            wins,
            matches,
        }
    }

    pub fn losses(&self) -> u32 {
        self.matches.saturating_sub(self.wins)
    }
}
