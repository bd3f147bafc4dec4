//! Persistence seam: what the pairing engine needs from wherever the tournament lives.

use crate::logic::pairing::swiss_pairings;
use crate::logic::rematch::{MatchHistory, RematchOracle};
use crate::models::{MatchId, MatchRecord, Pairing, PlayerId, StandingEntry, Tournament, TournamentError};

/// Read/write access to one tournament's players and match history.
///
/// Callers hold the handle for a whole round so standings and history come from the
/// same state.
pub trait TournamentStore: RematchOracle {
    /// Ranked standings, most wins first.
    fn standings(&self) -> Vec<StandingEntry>;
    /// All recorded matches.
    fn history(&self) -> Vec<MatchRecord>;
    fn report_match(&mut self, winner: PlayerId, loser: PlayerId) -> Result<MatchId, TournamentError>;
}

impl TournamentStore for Tournament {
    fn standings(&self) -> Vec<StandingEntry> {
        Tournament::standings(self)
    }

    fn history(&self) -> Vec<MatchRecord> {
        self.matches.clone()
    }

    fn report_match(&mut self, winner: PlayerId, loser: PlayerId) -> Result<MatchId, TournamentError> {
        Tournament::report_match(self, winner, loser)
    }
}

/// Standings and match history read together, once, at the start of a round.
#[derive(Clone, Debug)]
pub struct RoundSnapshot {
    pub standings: Vec<StandingEntry>,
    pub history: MatchHistory,
}

impl RoundSnapshot {
    pub fn capture<S: TournamentStore + ?Sized>(store: &S) -> Self {
        let standings = store.standings();
        let history = MatchHistory::from_records(&store.history());
        Self { standings, history }
    }

    /// Pairings for this snapshot.
    pub fn pairings(&self) -> Result<Vec<Pairing>, TournamentError> {
        swiss_pairings(&self.standings, &self.history)
    }
}

/// Compute the next round's pairings from the store's current state.
pub fn pair_next_round<S: TournamentStore + ?Sized>(store: &S) -> Result<Vec<Pairing>, TournamentError> {
    let snapshot = RoundSnapshot::capture(store);
    log::info!(
        "Pairing {} players ({} distinct pairs already met)",
        snapshot.standings.len(),
        snapshot.history.len()
    );
    snapshot.pairings()
}

/// Record a finished match through the store.
pub fn record_result<S: TournamentStore + ?Sized>(
    store: &mut S,
    winner: PlayerId,
    loser: PlayerId,
) -> Result<MatchId, TournamentError> {
    let id = store.report_match(winner, loser)?;
    log::debug!("Recorded match {}: {} beat {}", id, winner, loser);
    Ok(id)
}
