use actix_web::{web, HttpResponse};
use sea_orm::ColumnTrait;

use super::crud;
use super::matches::MatchSummary;
use crate::adapters::leagues_sea::LeagueResource;
use crate::adapters::matches_sea::MatchScope;
use crate::adapters::teams_sea::TeamResource;
use crate::db::require_db;
use crate::entities::teams;
use crate::error::AppError;
use crate::extractors::PathId;
use crate::repos::{crud as crud_repo, matches};
use crate::state::app_state::AppState;

async fn league_teams(
    app_state: web::Data<AppState>,
    id: PathId,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    crud_repo::require::<LeagueResource, _>(db, id.0).await?;
    let rows = crud_repo::list_where::<TeamResource, _, _>(db, teams::Column::LeagueId.eq(id.0)).await?;
    Ok(HttpResponse::Ok().json(rows))
}

async fn league_matches(
    app_state: web::Data<AppState>,
    id: PathId,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    crud_repo::require::<LeagueResource, _>(db, id.0).await?;
    let rows = matches::list_views(db, MatchScope::League(id.0)).await?;
    let body: Vec<MatchSummary> = rows.into_iter().map(MatchSummary::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(crud::list::<LeagueResource>))
        .route("", web::post().to(crud::create::<LeagueResource>))
        .route("/{id}", web::get().to(crud::get::<LeagueResource>))
        .route("/{id}", web::patch().to(crud::update::<LeagueResource>))
        .route("/{id}", web::delete().to(crud::delete::<LeagueResource>))
        .route("/{id}/teams", web::get().to(league_teams))
        .route("/{id}/matches", web::get().to(league_matches));
}
