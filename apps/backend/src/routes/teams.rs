use actix_web::{web, HttpResponse};
use sea_orm::ColumnTrait;

use super::crud;
use crate::adapters::players_sea::PlayerResource;
use crate::adapters::teams_sea::TeamResource;
use crate::db::require_db;
use crate::entities::players;
use crate::error::AppError;
use crate::extractors::PathId;
use crate::repos::{crud as crud_repo, teams};
use crate::state::app_state::AppState;

async fn team_players(
    app_state: web::Data<AppState>,
    id: PathId,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    crud_repo::require::<TeamResource, _>(db, id.0).await?;
    let rows =
        crud_repo::list_where::<PlayerResource, _, _>(db, players::Column::TeamId.eq(id.0)).await?;
    Ok(HttpResponse::Ok().json(rows))
}

async fn team_schedule(
    app_state: web::Data<AppState>,
    id: PathId,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let entries = teams::schedule(db, id.0).await?;
    Ok(HttpResponse::Ok().json(entries))
}

async fn team_record(
    app_state: web::Data<AppState>,
    id: PathId,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let record = teams::record(db, id.0).await?;
    Ok(HttpResponse::Ok().json(record))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(crud::list::<TeamResource>))
        .route("", web::post().to(crud::create::<TeamResource>))
        .route("/{id}", web::get().to(crud::get::<TeamResource>))
        .route("/{id}", web::patch().to(crud::update::<TeamResource>))
        .route("/{id}", web::delete().to(crud::delete::<TeamResource>))
        .route("/{id}/players", web::get().to(team_players))
        .route("/{id}/schedule", web::get().to(team_schedule))
        .route("/{id}/record", web::get().to(team_record));
}
