//! Tournament: registered players, match history, and derived standings.

use crate::models::game::{MatchId, MatchRecord};
use crate::models::player::{Player, PlayerId};
use crate::models::standing::StandingEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Pairing needs an even number of players; byes are not supported.
    OddNumberOfPlayers { count: usize },
    /// The same player appears more than once in a standings list.
    DuplicatePlayer(PlayerId),
    /// Player id is not registered in this tournament.
    PlayerNotFound(PlayerId),
    /// A match needs two different players.
    SelfMatch(PlayerId),
    /// Player name is empty after trimming.
    EmptyPlayerName,
    /// Tournament name is empty after trimming.
    EmptyTournamentName,
    /// Players cannot be deleted while match history refers to them.
    MatchesRecorded,
    /// Roster or standings CSV could not be read or written.
    Csv(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::OddNumberOfPlayers { count } => {
                write!(f, "Odd number of competitors ({}); pairing needs an even count", count)
            }
            TournamentError::DuplicatePlayer(id) => write!(f, "Player {} appears twice in standings", id),
            TournamentError::PlayerNotFound(id) => write!(f, "Player {} not found", id),
            TournamentError::SelfMatch(_) => write!(f, "A player cannot play against themselves"),
            TournamentError::EmptyPlayerName => write!(f, "Player name must not be empty"),
            TournamentError::EmptyTournamentName => write!(f, "Tournament name must not be empty"),
            TournamentError::MatchesRecorded => {
                write!(f, "Delete match history before deleting players")
            }
            TournamentError::Csv(msg) => write!(f, "CSV error: {}", msg),
        }
    }
}

impl std::error::Error for TournamentError {}

impl From<csv::Error> for TournamentError {
    fn from(e: csv::Error) -> Self {
        TournamentError::Csv(e.to_string())
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Full tournament state: registered players and the append-only match history.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    /// Players in registration order (used as the standings tie-break).
    pub players: Vec<Player>,
    /// Every reported match, oldest first.
    pub matches: Vec<MatchRecord>,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    /// Create an empty tournament.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            players: Vec::new(),
            matches: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Create an empty tournament from a user-supplied name (trimmed, must be non-empty).
    pub fn named(name: &str) -> Result<Self, TournamentError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyTournamentName);
        }
        Ok(Self::new(name))
    }

    /// Look up a registered player by id.
    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Register a player. The name is trimmed; names need not be unique.
    pub fn register_player(&mut self, name: impl Into<String>) -> Result<PlayerId, TournamentError> {
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        let player = Player::new(name_trimmed);
        let id = player.id;
        log::debug!("Registered player {} ({})", player.name, id);
        self.players.push(player);
        Ok(id)
    }

    /// Number of registered players.
    pub fn count_players(&self) -> usize {
        self.players.len()
    }

    /// Remove every player. Fails while any match is still recorded.
    pub fn delete_players(&mut self) -> Result<(), TournamentError> {
        if !self.matches.is_empty() {
            return Err(TournamentError::MatchesRecorded);
        }
        self.players.clear();
        Ok(())
    }

    /// Record the outcome of a single match between two registered players.
    pub fn report_match(&mut self, winner: PlayerId, loser: PlayerId) -> Result<MatchId, TournamentError> {
        if winner == loser {
            return Err(TournamentError::SelfMatch(winner));
        }
        for id in [winner, loser] {
            if self.get_player(id).is_none() {
                return Err(TournamentError::PlayerNotFound(id));
            }
        }
        let record = MatchRecord::new(winner, loser);
        let id = record.id;
        self.matches.push(record);
        Ok(id)
    }

    /// Clear the whole match history.
    pub fn delete_matches(&mut self) {
        self.matches.clear();
    }

    /// Current standings, most wins first. Players tied on wins keep registration order.
    pub fn standings(&self) -> Vec<StandingEntry> {
        let mut tally: HashMap<PlayerId, (u32, u32)> = HashMap::new();
        for m in &self.matches {
            let w = tally.entry(m.winner).or_default();
            w.0 += 1;
            w.1 += 1;
            tally.entry(m.loser).or_default().1 += 1;
        }
        let mut standings: Vec<StandingEntry> = self
            .players
            .iter()
            .map(|p| {
                let (wins, matches) = tally.get(&p.id).copied().unwrap_or_default();
                StandingEntry::new(p.id, p.name.clone(), wins, matches)
            })
            .collect();
        standings.sort_by(|a, b| b.wins.cmp(&a.wins));
        standings
    }
}
