//! Single binary web server: JSON API over the standings engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).
//!
//! The server keeps no state: every request carries the group and its games.

use actix_web::{get, post, web::Json, App, HttpResponse, HttpServer, Responder};
use chrono::{DateTime, Utc};
use league_standings::{compute_group, import_games_str, GameResult, GroupConfig, GroupStandings};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct StandingsBody {
    group: GroupConfig,
    #[serde(default)]
    games: Vec<GameResult>,
}

#[derive(Deserialize)]
struct CsvStandingsBody {
    group: GroupConfig,
    csv: String,
}

#[derive(Serialize)]
struct StandingsResponse {
    #[serde(flatten)]
    group: GroupStandings,
    computed_at: DateTime<Utc>,
}

fn bad_request(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

fn standings_response(group: &GroupConfig, games: &[GameResult]) -> HttpResponse {
    let standings = compute_group(group, games);
    log::debug!(
        "Computed standings for {} team(s) from {} game(s)",
        group.teams.len(),
        games.len()
    );
    HttpResponse::Ok().json(StandingsResponse {
        group: standings,
        computed_at: Utc::now(),
    })
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "league-standings",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Check a group config without computing anything.
#[post("/api/groups/validate")]
async fn api_validate_group(body: Json<GroupConfig>) -> HttpResponse {
    match body.validate() {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "ok": true })),
        Err(e) => bad_request(e),
    }
}

/// Standings, qualification and tie explanations for a group and its games.
#[post("/api/standings")]
async fn api_standings(body: Json<StandingsBody>) -> HttpResponse {
    if let Err(e) = body.group.validate() {
        return bad_request(e);
    }
    standings_response(&body.group, &body.games)
}

/// Same as `/api/standings`, with the games given as CSV.
#[post("/api/standings/csv")]
async fn api_standings_csv(body: Json<CsvStandingsBody>) -> HttpResponse {
    if let Err(e) = body.group.validate() {
        return bad_request(e);
    }
    match import_games_str(&body.group, &body.csv) {
        Ok(games) => standings_response(&body.group, &games),
        Err(e) => bad_request(e),
    }
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
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(|| {
        App::new()
            .service(api_health)
            .service(favicon)
            .service(api_validate_group)
            .service(api_standings)
            .service(api_standings_csv)
    })
    .bind(bind)?
    .run()
    .await
}
