//! Match history record.

use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Outcome of one played match. Append-only: never edited after it is written.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub recorded_at: DateTime<Utc>,
}

impl MatchRecord {
    pub fn new(winner: PlayerId, loser: PlayerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            winner,
            loser,
            recorded_at: Utc::now(),
        }
    }

    /// True if this match was played between `a` and `b`, in either role.
    pub fn involves(&self, a: PlayerId, b: PlayerId) -> bool {
        (self.winner == a && self.loser == b) || (self.winner == b && self.loser == a)
    }
}
