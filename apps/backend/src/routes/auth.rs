use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::auth;
use crate::state::app_state::AppState;

/// Both fields optional so absence is reported as MISSING_CREDENTIALS
/// rather than a JSON shape error.
#[derive(Debug, Deserialize)]
pub struct CredentialsBody {
    pub username: Option<String>,
    pub password: Option<String>,
}

async fn register(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CredentialsBody>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let outcome = auth::register(
        db,
        &app_state.auth,
        body.username.as_deref(),
        body.password.as_deref(),
    )
    .await?;
    Ok(HttpResponse::Ok().json(outcome))
}

async fn login(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CredentialsBody>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let outcome = auth::login(
        db,
        &app_state.auth,
        body.username.as_deref(),
        body.password.as_deref(),
    )
    .await?;
    Ok(HttpResponse::Ok().json(outcome))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register))
        .route("/login", web::post().to(login));
}
