//! Swiss pairing: match each player with the nearest-ranked opponent they have not met.

use crate::logic::rematch::RematchOracle;
use crate::models::{Pairing, StandingEntry, TournamentError};
use std::collections::HashSet;

/// Standings indices not yet given an opponent this round.
///
/// Invariant: every index below `first()` is assigned, so scanning forward from the head
/// visits the remaining players in rank order.
#[derive(Clone, Debug)]
struct UnassignedSet {
    assigned: Vec<bool>,
    remaining: usize,
}

impl UnassignedSet {
    fn new(len: usize) -> Self {
        Self {
            assigned: vec![false; len],
            remaining: len,
        }
    }

    fn len(&self) -> usize {
        self.remaining
    }

    /// Highest-ranked unassigned index.
    fn first(&self) -> Option<usize> {
        self.assigned.iter().position(|a| !a)
    }

    /// Unassigned indices ranked below `index`, nearest first.
    fn after(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.assigned
            .iter()
            .enumerate()
            .skip(index + 1)
            .filter(|(_, a)| !**a)
            .map(|(i, _)| i)
    }

    fn assign(&mut self, index: usize) {
        if !self.assigned[index] {
            self.assigned[index] = true;
            self.remaining -= 1;
        }
    }
}

/// Pair every player in `standings` for the next round.
///
/// `standings` must be ranked best first. The top unassigned player is matched with the
/// closest-ranked unassigned player they have not yet played. When every remaining opponent
/// is a rematch, the top player is paired with the next one down anyway, so the round is
/// always complete.
///
/// Pairings are returned in the order formed. Fails with `OddNumberOfPlayers` before any
/// oracle query if the count is odd, and with `DuplicatePlayer` if an id repeats.
pub fn swiss_pairings<O: RematchOracle + ?Sized>(
    standings: &[StandingEntry],
    oracle: &O,
) -> Result<Vec<Pairing>, TournamentError> {
    let n = standings.len();
    if n % 2 != 0 {
        return Err(TournamentError::OddNumberOfPlayers { count: n });
    }
    let mut seen = HashSet::with_capacity(n);
    for entry in standings {
        if !seen.insert(entry.player_id) {
            return Err(TournamentError::DuplicatePlayer(entry.player_id));
        }
    }

    let mut unassigned = UnassignedSet::new(n);
    let mut pairings = Vec::with_capacity(n / 2);

    while let Some(head) = unassigned.first() {
        let head_entry = &standings[head];

        let mut opponent = None;
        for cand in unassigned.after(head) {
            if !oracle.has_played(head_entry.player_id, standings[cand].player_id)? {
                opponent = Some(cand);
                break;
            }
        }

        let opponent = match opponent {
            Some(cand) => cand,
            None => {
                // Even count guarantees a partner is left.
                let forced = unassigned
                    .after(head)
                    .next()
                    .ok_or(TournamentError::OddNumberOfPlayers { count: n })?;
                log::warn!(
                    "{} has played every remaining opponent; forcing rematch with {}",
                    head_entry.name,
                    standings[forced].name
                );
                forced
            }
        };

        unassigned.assign(head);
        unassigned.assign(opponent);
        let pairing = Pairing::from_entries(head_entry, &standings[opponent]);
        log::debug!("Paired {} vs {}", pairing.name1, pairing.name2);
        pairings.push(pairing);
    }

    debug_assert_eq!(unassigned.len(), 0);
    Ok(pairings)
}
