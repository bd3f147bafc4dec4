//! Integration tests for CSV roster import and standings export.

use swiss_tournament_web::{import_roster, write_standings_csv, StandingEntry, TournamentError};
use uuid::Uuid;

#[test]
fn import_reads_names_and_skips_blanks() {
    let csv = "name\n Twilight Sparkle \n\nFluttershy\n\"Applejack, Jr\"\n";
    let names = import_roster(csv.as_bytes()).unwrap();
    assert_eq!(names, vec!["Twilight Sparkle", "Fluttershy", "Applejack, Jr"]);
}

#[test]
fn import_ignores_extra_columns() {
    let csv = "seed,name\n1,Ann\n2,Bob\n";
    assert_eq!(import_roster(csv.as_bytes()).unwrap(), vec!["Ann", "Bob"]);
}

#[test]
fn import_without_name_column_fails() {
    let csv = "player\nAnn\n";
    assert!(matches!(
        import_roster(csv.as_bytes()),
        Err(TournamentError::Csv(_))
    ));
}

#[test]
fn standings_export_has_header_and_rows() {
    let id = Uuid::new_v4();
    let standings = vec![StandingEntry::new(id, "Ann", 2, 3)];
    let mut buf = Vec::new();
    write_standings_csv(&standings, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text, format!("id,name,wins,matches\n{},Ann,2,3\n", id));
}
