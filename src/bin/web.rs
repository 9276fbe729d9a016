//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, SESSION_TTL_HOURS, CLEANUP_INTERVAL_MINUTES.

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use round_robin_web::{
    config::ServerConfig, current_bracket, current_standings, fixtures_to_csv, generate_fixtures,
    parse_roster_csv, record_winner, reveal_bracket, MatchNo, PlayerId, SessionId, TournamentError,
    TournamentSession,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Instant;

/// Per-session entry: tournament data + last activity time (for auto-cleanup).
struct SessionEntry {
    session: TournamentSession,
    last_activity: Instant,
}

/// In-memory state: many sessions by id. The write lock serializes every mutation.
type AppState = Data<RwLock<HashMap<SessionId, SessionEntry>>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize, Default)]
struct CreateSessionBody {
    #[serde(default)]
    players: Vec<String>,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
}

/// `?header=true` when the first CSV row is a header rather than a player.
#[derive(Deserialize)]
struct ImportQuery {
    #[serde(default)]
    header: bool,
}

#[derive(Deserialize)]
struct RecordWinnerBody {
    winner: String,
}

/// Path segment: session id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: SessionId,
}

/// Path segments: session id and player id (e.g. /api/tournaments/{id}/players/{player_id})
#[derive(Deserialize)]
struct TournamentPlayerPath {
    id: SessionId,
    player_id: PlayerId,
}

/// Path segments: session id and match number (e.g. /api/tournaments/{id}/matches/{match_no}/winner)
#[derive(Deserialize)]
struct TournamentMatchPath {
    id: SessionId,
    match_no: MatchNo,
}

/// Lock the state, look up the session, refresh its activity time and hand it to `f`.
fn with_session<F>(state: &AppState, id: SessionId, f: F) -> HttpResponse
where
    F: FnOnce(&mut TournamentSession) -> HttpResponse,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            f(&mut entry.session)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::PlayerNotFound(_) | TournamentError::UnknownFixture(_) => {
            HttpResponse::NotFound().json(body)
        }
        TournamentError::FixtureExport(_) => HttpResponse::InternalServerError().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "round-robin-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new session, optionally with an initial roster (client stores the id).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Option<Json<CreateSessionBody>>) -> HttpResponse {
    let body = body.map(Json::into_inner).unwrap_or_default();
    let mut session = TournamentSession::new();
    if let Err(e) = session.add_players(&body.players) {
        return error_response(&e);
    }
    let id = session.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let response = HttpResponse::Ok().json(&session);
    g.insert(
        id,
        SessionEntry {
            session,
            last_activity: Instant::now(),
        },
    );
    log::info!("Created tournament {} ({} sessions active)", id, g.len());
    response
}

/// Full session snapshot (404 if not found). Touching it refreshes last_activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_session(&state, path.id, |s| HttpResponse::Ok().json(&*s))
}

#[get("/api/tournaments/{id}/players")]
async fn api_list_players(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_session(&state, path.id, |s| HttpResponse::Ok().json(&s.players))
}

/// Add a player. Existing fixtures are kept; regenerate to include the newcomer.
#[post("/api/tournaments/{id}/players")]
async fn api_add_player(state: AppState, path: Path<TournamentPath>, body: Json<AddPlayerBody>) -> HttpResponse {
    with_session(&state, path.id, |s| match s.add_player(body.name.as_str()) {
        Ok(player) => HttpResponse::Created().json(player),
        Err(e) => error_response(&e),
    })
}

/// Import players from a CSV body (first column is the name).
#[post("/api/tournaments/{id}/players/import")]
async fn api_import_players(
    state: AppState,
    path: Path<TournamentPath>,
    query: Query<ImportQuery>,
    body: String,
) -> HttpResponse {
    let names = match parse_roster_csv(body.as_bytes(), query.header) {
        Ok(names) => names,
        Err(e) => return error_response(&e),
    };
    with_session(&state, path.id, |s| match s.add_players(&names) {
        Ok(added) => HttpResponse::Ok().json(serde_json::json!({ "added": added, "players": &s.players })),
        Err(e) => error_response(&e),
    })
}

/// Remove a player by id; their fixtures and results go with them.
#[delete("/api/tournaments/{id}/players/{player_id}")]
async fn api_remove_player(state: AppState, path: Path<TournamentPlayerPath>) -> HttpResponse {
    with_session(&state, path.id, |s| match s.remove_player(path.player_id) {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(e) => error_response(&e),
    })
}

/// Generate the round-robin schedule from the current roster (replaces fixtures, clears results).
#[post("/api/tournaments/{id}/schedule")]
async fn api_generate_schedule(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_session(&state, path.id, |s| match generate_fixtures(s) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "matches": &s.fixtures })),
        Err(e) => error_response(&e),
    })
}

#[get("/api/tournaments/{id}/matches")]
async fn api_list_matches(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_session(&state, path.id, |s| HttpResponse::Ok().json(&s.fixtures))
}

/// Fixtures with recorded winners as CSV.
#[get("/api/tournaments/{id}/matches.csv")]
async fn api_export_matches(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_session(&state, path.id, |s| match fixtures_to_csv(&s.fixtures, &s.winners) {
        Ok(csv) => HttpResponse::Ok().content_type("text/csv; charset=utf-8").body(csv),
        Err(e) => error_response(&e),
    })
}

/// Record the winner of one match.
#[put("/api/tournaments/{id}/matches/{match_no}/winner")]
async fn api_record_winner(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<RecordWinnerBody>,
) -> HttpResponse {
    with_session(&state, path.id, |s| match record_winner(s, path.match_no, &body.winner) {
        Ok(()) => HttpResponse::Ok().json(&*s),
        Err(e) => error_response(&e),
    })
}

#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_session(&state, path.id, |s| HttpResponse::Ok().json(current_standings(s)))
}

/// Reveal the bracket from the current standings.
#[post("/api/tournaments/{id}/bracket")]
async fn api_reveal_bracket(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_session(&state, path.id, |s| HttpResponse::Ok().json(reveal_bracket(s)))
}

/// Current bracket, recomputed if results changed since the last reveal. Leaves session state alone.
#[get("/api/tournaments/{id}/bracket")]
async fn api_get_bracket(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_session(&state, path.id, |s| HttpResponse::Ok().json(current_bracket(s)))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<SessionId, SessionEntry>::new()));

    // Background task: periodically remove sessions idle longer than the TTL
    let state_cleanup = state.clone();
    let session_ttl = config.session_ttl;
    let cleanup_interval = config.cleanup_interval;
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(cleanup_interval);
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < session_ttl);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_list_players)
            .service(api_add_player)
            .service(api_import_players)
            .service(api_remove_player)
            .service(api_generate_schedule)
            .service(api_list_matches)
            .service(api_export_matches)
            .service(api_record_winner)
            .service(api_standings)
            .service(api_reveal_bracket)
            .service(api_get_bracket)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
