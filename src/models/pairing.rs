//! Pairing: two players matched for the next round.

use crate::models::player::PlayerId;
use crate::models::standing::StandingEntry;
use serde::{Deserialize, Serialize};

/// Next-round opponents. Not persisted; recomputed from standings each round.
/// `id1` is the higher-ranked player at the time the pairing was formed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl Pairing {
    pub fn from_entries(first: &StandingEntry, second: &StandingEntry) -> Self {
        Self {
            id1: first.player_id,
            name1: first.name.clone(),
            id2: second.player_id,
            name2: second.name.clone(),
        }
    }

    pub fn ids(&self) -> (PlayerId, PlayerId) {
        (self.id1, self.id2)
    }
}
