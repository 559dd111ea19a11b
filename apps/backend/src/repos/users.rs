//! User repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::users_sea;
use crate::entities::users;
use crate::errors::domain::DomainError;

pub async fn find_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Option<users::Model>, DomainError> {
    Ok(users_sea::find_by_username(conn, username).await?)
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
    password_hash: &str,
) -> Result<users::Model, DomainError> {
    Ok(users_sea::create_user(conn, username, password_hash).await?)
}
