use actix_web::{web, HttpResponse};

use super::crud;
use crate::adapters::players_sea::PlayerResource;
use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::PathId;
use crate::repos::player_stats;
use crate::state::app_state::AppState;

/// Per-match stat lines for one player, newest first.
async fn player_history(
    app_state: web::Data<AppState>,
    id: PathId,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let rows = player_stats::history(db, id.0).await?;
    Ok(HttpResponse::Ok().json(rows))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(crud::list::<PlayerResource>))
        .route("", web::post().to(crud::create::<PlayerResource>))
        .route("/{id}", web::get().to(crud::get::<PlayerResource>))
        .route("/{id}", web::patch().to(crud::update::<PlayerResource>))
        .route("/{id}", web::delete().to(crud::delete::<PlayerResource>))
        .route("/{id}/stats", web::get().to(player_history));
}
