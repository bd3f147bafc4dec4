//! Swiss tournament web app: library with models and pairing logic.

pub mod config;
pub mod logic;
pub mod models;

pub use config::ServerConfig;
pub use logic::{
    import_roster, pair_next_round, record_result, swiss_pairings, write_standings_csv, MatchHistory,
    RematchOracle, RoundSnapshot, TournamentStore,
};
pub use models::{
    MatchId, MatchRecord, Pairing, Player, PlayerId, StandingEntry, Tournament, TournamentError,
    TournamentId,
};
