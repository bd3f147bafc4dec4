//! Tournament business logic: rematch lookups, Swiss pairing, store access, CSV roster.

mod pairing;
mod rematch;
mod roster;
mod store;

pub use pairing::swiss_pairings;
pub use rematch::{MatchHistory, RematchOracle};
pub use roster::{import_roster, write_standings_csv};
pub use store::{pair_next_round, record_result, RoundSnapshot, TournamentStore};
