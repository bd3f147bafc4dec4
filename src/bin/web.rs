//! Single binary web server: Swiss tournament API over REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT, INACTIVITY_HOURS.

use actix_web::{
    delete, get, post,
    web::{Bytes, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use swiss_tournament_web::{
    import_roster, pair_next_round, record_result, write_standings_csv, PlayerId, ServerConfig, Tournament,
    TournamentError, TournamentId,
};

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state: many tournaments by ID. Idle entries are removed by a background task.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    #[serde(default = "default_tournament_name")]
    name: String,
}

fn default_tournament_name() -> String {
    "Swiss tournament".to_string()
}

#[derive(Deserialize)]
struct RegisterPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct ReportMatchBody {
    winner: PlayerId,
    loser: PlayerId,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

fn bad_request(e: TournamentError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

/// Run `f` on the tournament with write access, refreshing its last activity time.
/// The lock is held for the whole call, so a pairing sees one consistent state.
fn with_tournament<F>(state: &AppState, id: TournamentId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Tournament) -> HttpResponse,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            f(&mut entry.tournament)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-tournament-web",
    })
}

/// Create a new tournament (returns it with id; client stores id for subsequent requests).
/// An empty body uses the default name; a malformed or blank-named body is rejected.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Bytes) -> HttpResponse {
    let name = if body.iter().all(u8::is_ascii_whitespace) {
        default_tournament_name()
    } else {
        match serde_json::from_slice::<CreateTournamentBody>(&body) {
            Ok(b) => b.name,
            Err(e) => {
                return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
            }
        }
    };
    let tournament = match Tournament::named(&name) {
        Ok(t) => t,
        Err(e) => return bad_request(e),
    };
    let id = tournament.id;
    let response = HttpResponse::Ok().json(&tournament);
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    log::info!("Created tournament {}", id);
    response
}

/// Get a tournament by id (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| HttpResponse::Ok().json(t))
}

/// Register a player.
#[post("/api/tournaments/{id}/players")]
async fn api_register_player(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<RegisterPlayerBody>,
) -> HttpResponse {
    with_tournament(&state, path.id, |t| match t.register_player(body.name.as_str()) {
        Ok(_) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    })
}

/// Register every name in a CSV body with a `name` header column.
#[post("/api/tournaments/{id}/players/import")]
async fn api_import_players(state: AppState, path: Path<TournamentPath>, body: String) -> HttpResponse {
    let names = match import_roster(body.as_bytes()) {
        Ok(names) => names,
        Err(e) => return bad_request(e),
    };
    with_tournament(&state, path.id, |t| {
        for name in names {
            if let Err(e) = t.register_player(name) {
                return bad_request(e);
            }
        }
        HttpResponse::Ok().json(t)
    })
}

/// Remove every player (match history must be cleared first).
#[delete("/api/tournaments/{id}/players")]
async fn api_delete_players(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| match t.delete_players() {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    })
}

#[get("/api/tournaments/{id}/players/count")]
async fn api_count_players(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        HttpResponse::Ok().json(serde_json::json!({ "count": t.count_players() }))
    })
}

/// Record one match result.
#[post("/api/tournaments/{id}/matches")]
async fn api_report_match(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<ReportMatchBody>,
) -> HttpResponse {
    with_tournament(&state, path.id, |t| match record_result(t, body.winner, body.loser) {
        Ok(_) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    })
}

/// Clear match history.
#[delete("/api/tournaments/{id}/matches")]
async fn api_delete_matches(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        t.delete_matches();
        HttpResponse::Ok().json(t)
    })
}

#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| HttpResponse::Ok().json(t.standings()))
}

#[get("/api/tournaments/{id}/standings.csv")]
async fn api_standings_csv(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        let mut buf = Vec::new();
        match write_standings_csv(&t.standings(), &mut buf) {
            Ok(()) => HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .body(buf),
            Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() })),
        }
    })
}

/// Next round's Swiss pairings (400 on an odd number of players).
#[get("/api/tournaments/{id}/pairings")]
async fn api_pairings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| match pair_next_round(&*t) {
        Ok(pairings) => HttpResponse::Ok().json(pairings),
        Err(e) => bad_request(e),
    })
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));

    // Background task: every 30 minutes, remove tournaments idle past the timeout
    let state_cleanup = state.clone();
    let inactivity_timeout = config.inactivity_timeout;
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < inactivity_timeout);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_register_player)
            .service(api_import_players)
            .service(api_delete_players)
            .service(api_count_players)
            .service(api_report_match)
            .service(api_delete_matches)
            .service(api_standings)
            .service(api_standings_csv)
            .service(api_pairings)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
