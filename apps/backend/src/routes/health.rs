use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(format!("Touchline league service v{}", env!("CARGO_PKG_VERSION"))))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    app_version: String,
    db: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: String,
    time: String,
}

/// (db status, db error, latest applied migration)
async fn probe(conn: &DatabaseConnection) -> (String, Option<String>, String) {
    let ping = Statement::from_string(conn.get_database_backend(), "SELECT 1 AS health_check");
    if let Err(e) = conn.query_one(ping).await {
        return (
            "error".to_string(),
            Some(format!("DB query failed: {e}")),
            "unknown".to_string(),
        );
    }

    let migrations = match get_latest_migration_version(conn).await {
        Ok(Some(version)) => version,
        Ok(None) => "no_migrations".to_string(),
        Err(_) => "unknown".to_string(),
    };
    ("ok".to_string(), None, migrations)
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let time = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let (db, db_error, migrations) = match require_db(&app_state) {
        Ok(conn) => probe(conn).await,
        Err(e) => ("error".to_string(), Some(format!("DB unavailable: {e}")), "unknown".to_string()),
    };

    // The process itself is up even when the database is not.
    let response = HealthResponse {
        status: "ok".to_string(),
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        db,
        db_error,
        migrations,
        time,
    };

    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
