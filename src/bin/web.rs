//! Single binary web server: REST API over the tournament engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), DATA_DIR (e.g. data).

use actix_web::{
    get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chess_tournament_web::{
    apply_round_results, close_tournament, rank, start_round, JsonStore, Player, PlayerId,
    Tournament, TournamentId,
};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// In-memory mirror of the JSON store. Mutating handlers update these
/// collections and then save the affected file(s) whole.
struct AppState {
    store: JsonStore,
    players: Vec<Player>,
    tournaments: Vec<Tournament>,
}

type SharedState = Data<RwLock<AppState>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreatePlayerBody {
    first_name: String,
    last_name: String,
    birth_date: String,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
    location: String,
    start_date: String,
    end_date: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_number_of_rounds")]
    number_of_rounds: u32,
}

fn default_number_of_rounds() -> u32 {
    4
}

#[derive(Deserialize)]
struct RegisterPlayersBody {
    player_ids: Vec<PlayerId>,
}

#[derive(Serialize)]
struct RegisterPlayersResponse {
    added: usize,
    tournament: Tournament,
}

#[derive(Deserialize)]
struct RoundResultsBody {
    /// One (score A, score B) pair per match, in the round's match order.
    results: Vec<(f64, f64)>,
}

#[derive(Serialize)]
struct StandingEntry {
    player_id: PlayerId,
    score: f64,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

fn error_body(message: impl std::fmt::Display) -> serde_json::Value {
    serde_json::json!({ "error": message.to_string() })
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "chess-tournament-web",
    })
}

/// List all registered players (the ledger).
#[get("/api/players")]
async fn api_list_players(state: SharedState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(&g.players)
}

/// Register a new player (ledger entry starts at 0 points).
#[post("/api/players")]
async fn api_create_player(state: SharedState, body: Json<CreatePlayerBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let player = Player::new(
        body.first_name.trim(),
        body.last_name.trim(),
        body.birth_date.trim(),
    );
    g.players.push(player.clone());
    if let Err(e) = g.store.save_players(&g.players) {
        return HttpResponse::InternalServerError().json(error_body(e));
    }
    HttpResponse::Ok().json(player)
}

/// List all tournaments.
#[get("/api/tournaments")]
async fn api_list_tournaments(state: SharedState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(&g.tournaments)
}

/// Create a new tournament (no rounds, no enrolled players).
#[post("/api/tournaments")]
async fn api_create_tournament(
    state: SharedState,
    body: Json<CreateTournamentBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let tournament = Tournament::new(
        body.name.trim(),
        body.location.trim(),
        body.start_date.trim(),
        body.end_date.trim(),
        body.description.trim(),
        body.number_of_rounds,
    );
    g.tournaments.push(tournament.clone());
    if let Err(e) = g.store.save_tournaments(&g.tournaments) {
        return HttpResponse::InternalServerError().json(error_body(e));
    }
    HttpResponse::Ok().json(tournament)
}

/// Get a tournament by id (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: SharedState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.tournaments.iter().find(|t| t.id == path.id) {
        Some(t) => HttpResponse::Ok().json(t),
        None => HttpResponse::NotFound().json(error_body("No tournament")),
    }
}

/// Enroll registered players into a tournament (duplicates are skipped).
#[post("/api/tournaments/{id}/players")]
async fn api_register_players(
    state: SharedState,
    path: Path<TournamentPath>,
    body: Json<RegisterPlayersBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    if let Some(unknown) = body
        .player_ids
        .iter()
        .find(|id| !g.players.iter().any(|p| p.id == **id))
    {
        return HttpResponse::BadRequest().json(error_body(format!("Unknown player {unknown}")));
    }
    let Some(t) = g.tournaments.iter_mut().find(|t| t.id == path.id) else {
        return HttpResponse::NotFound().json(error_body("No tournament"));
    };
    if t.is_closed {
        return HttpResponse::BadRequest().json(error_body("Tournament is closed"));
    }
    let added = t.register_players(body.player_ids.iter().cloned());
    let tournament = t.clone();
    if let Err(e) = g.store.save_tournaments(&g.tournaments) {
        return HttpResponse::InternalServerError().json(error_body(e));
    }
    HttpResponse::Ok().json(RegisterPlayersResponse { added, tournament })
}

/// Start the next round: pair players and append an open round.
#[post("/api/tournaments/{id}/rounds")]
async fn api_start_round(state: SharedState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let AppState {
        store,
        players,
        tournaments,
    } = &mut *g;
    let Some(t) = tournaments.iter_mut().find(|t| t.id == path.id) else {
        return HttpResponse::NotFound().json(error_body("No tournament"));
    };
    if t.is_closed {
        return HttpResponse::BadRequest().json(error_body("Tournament is closed"));
    }
    if t.has_open_round() {
        return HttpResponse::BadRequest().json(error_body("Current round is still open"));
    }
    match start_round(t, players) {
        Ok(()) => {
            log::info!("Started round {} of tournament {}", t.current_round, t.name);
            let tournament = t.clone();
            if let Err(e) = store.save_tournaments(tournaments) {
                return HttpResponse::InternalServerError().json(error_body(e));
            }
            HttpResponse::Ok().json(tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(error_body(e)),
    }
}

/// Enter results for the open round; updates the ledger and closes the round.
#[put("/api/tournaments/{id}/rounds/current/results")]
async fn api_enter_results(
    state: SharedState,
    path: Path<TournamentPath>,
    body: Json<RoundResultsBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let AppState {
        store,
        players,
        tournaments,
    } = &mut *g;
    let Some(t) = tournaments.iter_mut().find(|t| t.id == path.id) else {
        return HttpResponse::NotFound().json(error_body("No tournament"));
    };
    if t.is_closed {
        return HttpResponse::BadRequest().json(error_body("Tournament is closed"));
    }
    let Some(round) = t.current_open_round_mut() else {
        return HttpResponse::BadRequest().json(error_body("No open round"));
    };
    match apply_round_results(round, &body.results, players) {
        Ok(()) => {
            log::info!("Recorded results for {} of tournament {}", round.name, path.id);
            let tournament = t.clone();
            if let Err(e) = store.save_players(players) {
                return HttpResponse::InternalServerError().json(error_body(e));
            }
            if let Err(e) = store.save_tournaments(tournaments) {
                return HttpResponse::InternalServerError().json(error_body(e));
            }
            HttpResponse::Ok().json(tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(error_body(e)),
    }
}

/// Current standings: enrolled players by descending ledger score.
#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: SharedState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let Some(t) = g.tournaments.iter().find(|t| t.id == path.id) else {
        return HttpResponse::NotFound().json(error_body("No tournament"));
    };
    let standings: Vec<StandingEntry> = rank(&t.players, &g.players)
        .into_iter()
        .map(|(player_id, score)| StandingEntry { player_id, score })
        .collect();
    HttpResponse::Ok().json(standings)
}

/// Close a tournament. Rejected with 409 while any round is still open.
#[post("/api/tournaments/{id}/close")]
async fn api_close_tournament(state: SharedState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let AppState {
        store, tournaments, ..
    } = &mut *g;
    let Some(t) = tournaments.iter_mut().find(|t| t.id == path.id) else {
        return HttpResponse::NotFound().json(error_body("No tournament"));
    };
    if !close_tournament(t) {
        return HttpResponse::Conflict().json(error_body("Tournament has unfinished rounds"));
    }
    log::info!("Closed tournament {}", t.name);
    let tournament = t.clone();
    if let Err(e) = store.save_tournaments(tournaments) {
        return HttpResponse::InternalServerError().json(error_body(e));
    }
    HttpResponse::Ok().json(tournament)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let bind = (host.as_str(), port);

    let store = JsonStore::new(&data_dir);
    let players = store
        .load_players()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
    let tournaments = store
        .load_tournaments()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
    log::info!(
        "Loaded {} player(s) and {} tournament(s) from {}",
        players.len(),
        tournaments.len(),
        data_dir
    );
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(AppState {
        store,
        players,
        tournaments,
    }));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_list_players)
            .service(api_create_player)
            .service(api_list_tournaments)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_register_players)
            .service(api_start_round)
            .service(api_enter_results)
            .service(api_standings)
            .service(api_close_tournament)
    })
    .bind(bind)?
    .run()
    .await
}
