use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::db::require_db;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::reports::{list_reports, render_report, ReportKey};
use crate::state::app_state::AppState;
use crate::table::TableQuery;

#[derive(Debug, Deserialize)]
struct ReportParams {
    q: Option<String>,
    sort: Option<String>,
    dir: Option<String>,
}

async fn catalog() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(list_reports()))
}

async fn run(
    app_state: web::Data<AppState>,
    key: web::Path<String>,
    params: web::Query<ReportParams>,
) -> Result<HttpResponse, AppError> {
    let key: ReportKey = key
        .parse()
        .map_err(|detail: String| AppError::not_found(ErrorCode::ReportNotFound, detail))?;

    let query = TableQuery::parse(
        params.q.as_deref(),
        params.sort.as_deref(),
        params.dir.as_deref(),
        key.definition().columns,
    )
    .map_err(|detail| AppError::invalid(ErrorCode::InvalidQuery, detail))?;

    let db = require_db(&app_state)?;
    let output = render_report(db, key, &query).await?;
    Ok(HttpResponse::Ok().json(output))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(catalog))
        .route("/{key}", web::get().to(run));
}
