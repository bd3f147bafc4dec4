//! CSV roster import and standings export.

use crate::models::{PlayerId, StandingEntry, TournamentError};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

#[derive(Deserialize)]
struct RosterRow {
    name: String,
}

#[derive(Serialize)]
struct StandingRow<'a> {
    id: PlayerId,
    name: &'a str,
    wins: u32,
    matches: u32,
}

/// Read player names from CSV with a `name` header column. Blank names are skipped.
pub fn import_roster<R: Read>(reader: R) -> Result<Vec<String>, TournamentError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut names = Vec::new();
    for row in rdr.deserialize::<RosterRow>() {
        let row = row?;
        if !row.name.is_empty() {
            names.push(row.name);
        }
    }
    Ok(names)
}

/// Write standings as CSV: `id,name,wins,matches`.
pub fn write_standings_csv<W: Write>(standings: &[StandingEntry], writer: W) -> Result<(), TournamentError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for s in standings {
        wtr.serialize(StandingRow {
            id: s.player_id,
            name: &s.name,
            wins: s.wins,
            matches: s.matches,
        })?;
    }
    wtr.flush().map_err(|e| TournamentError::Csv(e.to_string()))?;
    Ok(())
}
