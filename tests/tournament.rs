//! Integration tests for the tournament store: registration, match reports, standings,
//! and pairing the next round from stored state.

use std::collections::HashSet;
use swiss_tournament_web::{
    pair_next_round, record_result, RematchOracle, RoundSnapshot, Tournament, TournamentError,
    TournamentStore,
};
use uuid::Uuid;

fn tournament_with_players(names: &[&str]) -> Tournament {
    let mut t = Tournament::new("Test");
    for n in names {
        t.register_player(*n).unwrap();
    }
    t
}

fn id_of(t: &Tournament, name: &str) -> Uuid {
    t.players.iter().find(|p| p.name == name).unwrap().id
}

#[test]
fn tournament_names_are_trimmed_and_required() {
    assert!(matches!(
        Tournament::named(""),
        Err(TournamentError::EmptyTournamentName)
    ));
    assert!(matches!(
        Tournament::named("   "),
        Err(TournamentError::EmptyTournamentName)
    ));
    assert_eq!(Tournament::named("  Spring Open ").unwrap().name, "Spring Open");
}

#[test]
fn register_and_count() {
    let mut t = Tournament::new("Test");
    assert_eq!(t.count_players(), 0);
    t.register_player("Chandra Nalaar").unwrap();
    t.register_player("Chandra Nalaar").unwrap();
    assert_eq!(t.count_players(), 2);
}

#[test]
fn blank_name_is_rejected() {
    let mut t = Tournament::new("Test");
    assert_eq!(t.register_player("   "), Err(TournamentError::EmptyPlayerName));
    let id = t.register_player("  Melpomene Murray ").unwrap();
    assert_eq!(t.get_player(id).unwrap().name, "Melpomene Murray");
}

#[test]
fn delete_players_requires_empty_history() {
    let mut t = tournament_with_players(&["A", "B"]);
    let (a, b) = (id_of(&t, "A"), id_of(&t, "B"));
    t.report_match(a, b).unwrap();
    assert_eq!(t.delete_players(), Err(TournamentError::MatchesRecorded));
    t.delete_matches();
    t.delete_players().unwrap();
    assert_eq!(t.count_players(), 0);
}

#[test]
fn report_match_validates_players() {
    let mut t = tournament_with_players(&["A", "B"]);
    let a = id_of(&t, "A");
    let stranger = Uuid::new_v4();
    assert_eq!(t.report_match(a, a), Err(TournamentError::SelfMatch(a)));
    assert_eq!(
        t.report_match(a, stranger),
        Err(TournamentError::PlayerNotFound(stranger))
    );
    assert!(t.matches.is_empty());
}

#[test]
fn standings_before_matches() {
    let t = tournament_with_players(&["Melpomene Murray", "Randy Schwartz"]);
    let standings = t.standings();
    assert_eq!(standings.len(), 2);
    for s in &standings {
        assert_eq!((s.wins, s.matches), (0, 0));
    }
    assert_eq!(standings[0].name, "Melpomene Murray");
}

#[test]
fn standings_after_matches() {
    let mut t = tournament_with_players(&["Bruno Walton", "Boots O'Neal", "Cathy Burton", "Diane Grant"]);
    let ids: Vec<_> = t.players.iter().map(|p| p.id).collect();
    t.report_match(ids[0], ids[1]).unwrap();
    t.report_match(ids[2], ids[3]).unwrap();

    let standings = t.standings();
    let winners: HashSet<_> = standings[..2].iter().map(|s| s.player_id).collect();
    assert_eq!(winners, HashSet::from([ids[0], ids[2]]));
    for s in &standings {
        assert_eq!(s.matches, 1);
        if winners.contains(&s.player_id) {
            assert_eq!((s.wins, s.losses()), (1, 0));
        } else {
            assert_eq!((s.wins, s.losses()), (0, 1));
        }
    }
}

#[test]
fn tournament_answers_rematch_queries() {
    let mut t = tournament_with_players(&["A", "B", "C"]);
    let (a, b, c) = (id_of(&t, "A"), id_of(&t, "B"), id_of(&t, "C"));
    t.report_match(b, a).unwrap();
    assert!(t.has_played(a, b).unwrap());
    assert!(t.has_played(b, a).unwrap());
    assert!(!t.has_played(a, c).unwrap());
}

#[test]
fn snapshot_reads_standings_and_history_once() {
    let mut t = tournament_with_players(&["A", "B", "C", "D"]);
    let (a, b) = (id_of(&t, "A"), id_of(&t, "B"));
    t.report_match(a, b).unwrap();
    let snapshot = RoundSnapshot::capture(&t);
    t.delete_matches();
    assert_eq!(snapshot.standings[0].player_id, a);
    assert_eq!(snapshot.history.len(), 1);
    assert!(snapshot.history.has_played(b, a).unwrap());
}

#[test]
fn odd_roster_cannot_be_paired() {
    let t = tournament_with_players(&["A", "B", "C"]);
    assert_eq!(
        pair_next_round(&t),
        Err(TournamentError::OddNumberOfPlayers { count: 3 })
    );
}

/// Three rounds of eight players where the higher-ranked player of each pair wins.
#[test]
fn three_rounds_without_rematches() {
    let mut t = tournament_with_players(&["P1", "P2", "P3", "P4", "P5", "P6", "P7", "P8"]);
    let mut met: HashSet<(Uuid, Uuid)> = HashSet::new();
    let mut last_round = Vec::new();

    for _ in 0..3 {
        let pairings = pair_next_round(&t).unwrap();
        assert_eq!(pairings.len(), 4);
        for p in &pairings {
            assert!(!met.contains(&(p.id1, p.id2)) && !met.contains(&(p.id2, p.id1)));
            met.insert((p.id1, p.id2));
            t.report_match(p.id1, p.id2).unwrap();
        }
        last_round = pairings;
    }

    let names: Vec<_> = last_round
        .iter()
        .map(|p| (p.name1.as_str(), p.name2.as_str()))
        .collect();
    assert_eq!(
        names,
        vec![("P1", "P5"), ("P2", "P3"), ("P6", "P7"), ("P4", "P8")]
    );
}

fn play_out_round<S: TournamentStore>(store: &mut S) -> usize {
    let pairings = pair_next_round(&*store).unwrap();
    for p in &pairings {
        record_result(store, p.id1, p.id2).unwrap();
    }
    pairings.len()
}

#[test]
fn results_recorded_through_the_store_feed_the_next_round() {
    let mut t = tournament_with_players(&["A", "B", "C", "D"]);
    assert_eq!(play_out_round(&mut t), 2);
    assert_eq!(t.history().len(), 2);

    let standings = TournamentStore::standings(&t);
    assert_eq!((standings[0].name.as_str(), standings[0].wins), ("A", 1));
    assert_eq!((standings[1].name.as_str(), standings[1].wins), ("C", 1));

    let a = id_of(&t, "A");
    assert_eq!(
        record_result(&mut t, a, a),
        Err(TournamentError::SelfMatch(a))
    );
    assert_eq!(t.history().len(), 2);
}
