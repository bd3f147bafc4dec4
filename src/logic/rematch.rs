//! Rematch oracle: has this pair of players already met?

use crate::models::{MatchRecord, PlayerId, Tournament, TournamentError};
use std::collections::HashSet;

/// Answers whether two players have already played each other.
///
/// Implementations must be symmetric in `a` and `b` and free of side effects; the pairing
/// engine may ask O(n²) times per round. Errors are passed through the engine unchanged.
pub trait RematchOracle {
    fn has_played(&self, a: PlayerId, b: PlayerId) -> Result<bool, TournamentError>;
}

/// Set of unordered player pairs that have met, built once from the match history.
#[derive(Clone, Debug, Default)]
pub struct MatchHistory {
    played: HashSet<(PlayerId, PlayerId)>,
}

fn key(a: PlayerId, b: PlayerId) -> (PlayerId, PlayerId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl MatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a MatchRecord>) -> Self {
        let mut history = Self::new();
        for m in records {
            history.insert(m.winner, m.loser);
        }
        history
    }

    pub fn insert(&mut self, a: PlayerId, b: PlayerId) {
        self.played.insert(key(a, b));
    }

    /// Number of distinct pairs that have met (repeat meetings count once).
    pub fn len(&self) -> usize {
        self.played.len()
    }

    pub fn is_empty(&self) -> bool {
        self.played.is_empty()
    }
}

impl RematchOracle for MatchHistory {
    fn has_played(&self, a: PlayerId, b: PlayerId) -> Result<bool, TournamentError> {
        Ok(self.played.contains(&key(a, b)))
    }
}

/// Direct scan of the tournament's match list.
impl RematchOracle for Tournament {
    fn has_played(&self, a: PlayerId, b: PlayerId) -> Result<bool, TournamentError> {
        Ok(self.matches.iter().any(|m| m.involves(a, b)))
    }
}
