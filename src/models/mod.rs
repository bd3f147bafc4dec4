//! Data structures for the Swiss tournament: players, match history, standings, pairings.

mod game;
mod pairing;
mod player;
mod standing;
mod tournament;

pub use game::{MatchId, MatchRecord};
pub use pairing::Pairing;
pub use player::{Player, PlayerId};
pub use standing::StandingEntry;
pub use tournament::{Tournament, TournamentError, TournamentId};
