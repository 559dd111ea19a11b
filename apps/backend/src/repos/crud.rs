//! Domain-facing CRUD for every [`Resource`]: validation in, NotFound out.

use sea_orm::sea_query::IntoCondition;
use sea_orm::ConnectionTrait;

use crate::adapters::crud_sea::{self, Resource};
use crate::domain::Validate;
use crate::errors::domain::DomainError;

pub fn not_found<R: Resource>(id: i32) -> DomainError {
    DomainError::not_found(R::not_found_kind(), format!("{} {id} not found", R::LABEL))
}

pub async fn create<R, C>(conn: &C, input: R::Create) -> Result<R::Model, DomainError>
where
    R: Resource,
    R::Create: Validate,
    C: ConnectionTrait + Send + Sync,
{
    input.validate()?;
    Ok(crud_sea::create::<R, C>(conn, input).await?)
}

pub async fn list<R: Resource, C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<R::Model>, DomainError> {
    Ok(crud_sea::list::<R, C>(conn).await?)
}

pub async fn list_where<R, C, F>(conn: &C, filter: F) -> Result<Vec<R::Model>, DomainError>
where
    R: Resource,
    C: ConnectionTrait + Send + Sync,
    F: IntoCondition,
{
    Ok(crud_sea::list_where::<R, C, F>(conn, filter).await?)
}

pub async fn find<R: Resource, C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<R::Model>, DomainError> {
    Ok(crud_sea::find::<R, C>(conn, id).await?)
}

/// Like [`find`] but a missing row is an error.
pub async fn require<R: Resource, C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<R::Model, DomainError> {
    find::<R, C>(conn, id)
        .await?
        .ok_or_else(|| not_found::<R>(id))
}

pub async fn update<R, C>(conn: &C, id: i32, patch: R::Patch) -> Result<R::Model, DomainError>
where
    R: Resource,
    R::Patch: Validate,
    C: ConnectionTrait + Send + Sync,
{
    patch.validate()?;
    crud_sea::update::<R, C>(conn, id, patch)
        .await?
        .ok_or_else(|| not_found::<R>(id))
}

pub async fn delete<R: Resource, C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<(), DomainError> {
    match crud_sea::delete::<R, C>(conn, id).await? {
        0 => Err(not_found::<R>(id)),
        _ => Ok(()),
    }
}
