//! Generic handlers for any [`Resource`]; entity modules register them as
//! `web::get().to(crud::list::<LeagueResource>)`.

use actix_web::{web, HttpResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::adapters::Resource;
use crate::db::require_db;
use crate::domain::Validate;
use crate::error::AppError;
use crate::extractors::{PathId, ValidatedJson};
use crate::repos::crud;
use crate::state::app_state::AppState;

pub async fn list<R>(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError>
where
    R: Resource,
    R::Model: Serialize,
{
    let db = require_db(&app_state)?;
    let rows = crud::list::<R, _>(db).await?;
    Ok(HttpResponse::Ok().json(rows))
}

pub async fn get<R>(app_state: web::Data<AppState>, id: PathId) -> Result<HttpResponse, AppError>
where
    R: Resource,
    R::Model: Serialize,
{
    let db = require_db(&app_state)?;
    let row = crud::require::<R, _>(db, id.0).await?;
    Ok(HttpResponse::Ok().json(row))
}

pub async fn create<R>(
    app_state: web::Data<AppState>,
    body: ValidatedJson<R::Create>,
) -> Result<HttpResponse, AppError>
where
    R: Resource,
    R::Create: DeserializeOwned + Validate + 'static,
    R::Model: Serialize,
{
    let db = require_db(&app_state)?;
    let created = crud::create::<R, _>(db, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

pub async fn update<R>(
    app_state: web::Data<AppState>,
    id: PathId,
    body: ValidatedJson<R::Patch>,
) -> Result<HttpResponse, AppError>
where
    R: Resource,
    R::Patch: DeserializeOwned + Validate + 'static,
    R::Model: Serialize,
{
    let db = require_db(&app_state)?;
    let updated = crud::update::<R, _>(db, id.0, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn delete<R: Resource>(
    app_state: web::Data<AppState>,
    id: PathId,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    crud::delete::<R, _>(db, id.0).await?;
    Ok(HttpResponse::NoContent().finish())
}
