use actix_web::{web, HttpResponse};

use super::crud;
use super::matches::MatchSummary;
use crate::adapters::matches_sea::MatchScope;
use crate::adapters::referees_sea::RefereeResource;
use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::PathId;
use crate::repos::{crud as crud_repo, matches};
use crate::state::app_state::AppState;

async fn referee_matches(
    app_state: web::Data<AppState>,
    id: PathId,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    crud_repo::require::<RefereeResource, _>(db, id.0).await?;
    let rows = matches::list_views(db, MatchScope::Referee(id.0)).await?;
    let body: Vec<MatchSummary> = rows.into_iter().map(MatchSummary::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(crud::list::<RefereeResource>))
        .route("", web::post().to(crud::create::<RefereeResource>))
        .route("/{id}", web::get().to(crud::get::<RefereeResource>))
        .route("/{id}", web::patch().to(crud::update::<RefereeResource>))
        .route("/{id}", web::delete().to(crud::delete::<RefereeResource>))
        .route("/{id}/matches", web::get().to(referee_matches));
}
