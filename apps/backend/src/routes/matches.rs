use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;
use time::OffsetDateTime;

use super::crud;
use crate::adapters::match_stats_sea::MatchStatsInput;
use crate::adapters::matches_sea::{MatchPatch, MatchResource, MatchScope, MatchViewRow};
use crate::adapters::player_stats_sea::PlayerStatsInput;
use crate::db::require_db;
use crate::domain::score_text;
use crate::error::AppError;
use crate::extractors::path_id::param_id;
use crate::extractors::{PathId, ValidatedJson};
use crate::repos::{match_stats, matches, player_stats};
use crate::services::matches::{create_match, CreateMatchRequest};
use crate::state::app_state::AppState;

/// List row for matches: ids plus display names and the result, if any.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSummary {
    pub id: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub location: String,
    pub league_id: i32,
    pub league_name: String,
    pub home_team_id: i32,
    pub home_team_name: String,
    pub away_team_id: i32,
    pub away_team_name: String,
    pub referee_id: Option<i32>,
    pub referee_name: Option<String>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub score: String,
}

impl From<MatchViewRow> for MatchSummary {
    fn from(row: MatchViewRow) -> Self {
        let referee_name = row.referee_name();
        let score = score_text(row.score());
        Self {
            id: row.id,
            date: row.date,
            location: row.location,
            league_id: row.league_id,
            league_name: row.league_name,
            home_team_id: row.home_team_id,
            home_team_name: row.home_team_name,
            away_team_id: row.away_team_id,
            away_team_name: row.away_team_name,
            referee_id: row.referee_id,
            referee_name,
            home_score: row.home_score,
            away_score: row.away_score,
            score,
        }
    }
}

async fn list_matches(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let rows = matches::list_views(db, MatchScope::All).await?;
    let body: Vec<MatchSummary> = rows.into_iter().map(MatchSummary::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn create(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateMatchRequest>,
) -> Result<HttpResponse, AppError> {
    let created = create_match(&app_state, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

async fn update(
    app_state: web::Data<AppState>,
    id: PathId,
    body: ValidatedJson<MatchPatch>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let updated = matches::update(db, id.0, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

async fn get_stats(app_state: web::Data<AppState>, id: PathId) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let stats = match_stats::get_or_default(db, id.0).await?;
    Ok(HttpResponse::Ok().json(stats))
}

async fn put_stats(
    app_state: web::Data<AppState>,
    id: PathId,
    body: ValidatedJson<MatchStatsInput>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let stats = match_stats::upsert(db, id.0, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(stats))
}

async fn list_player_stats(
    app_state: web::Data<AppState>,
    id: PathId,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let rows = player_stats::list_for_match(db, id.0).await?;
    Ok(HttpResponse::Ok().json(rows))
}

async fn put_player_stats(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    id: PathId,
    body: ValidatedJson<PlayerStatsInput>,
) -> Result<HttpResponse, AppError> {
    let player_id = param_id(&req, "player_id")?;
    let db = require_db(&app_state)?;
    let line = player_stats::upsert(db, id.0, player_id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(line))
}

async fn delete_player_stats(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    id: PathId,
) -> Result<HttpResponse, AppError> {
    let player_id = param_id(&req, "player_id")?;
    let db = require_db(&app_state)?;
    player_stats::delete(db, id.0, player_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_matches))
        .route("", web::post().to(create))
        .route("/{id}", web::get().to(crud::get::<MatchResource>))
        .route("/{id}", web::patch().to(update))
        .route("/{id}", web::delete().to(crud::delete::<MatchResource>))
        .route("/{id}/stats", web::get().to(get_stats))
        .route("/{id}/stats", web::put().to(put_stats))
        .route("/{id}/player-stats", web::get().to(list_player_stats))
        .route("/{id}/player-stats/{player_id}", web::put().to(put_player_stats))
        .route(
            "/{id}/player-stats/{player_id}",
            web::delete().to(delete_player_stats),
        );
}
