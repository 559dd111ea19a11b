//! Username/password registration and login.
//!
//! Hashing and verification are CPU-bound, so both run on actix's blocking
//! pool. Login failures carry one generic message so callers cannot tell an
//! unknown username from a wrong password, and an unknown username still
//! pays for one bcrypt verification at the configured cost.

use actix_web::web;
use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::auth::AuthConfig;
use crate::domain::credentials::normalize_credentials;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::errors::ErrorCode;
use crate::logging::pii::mask_username;
use crate::logging::security;
use crate::repos::users;

pub const INVALID_CREDENTIALS_DETAIL: &str = "Invalid username or password";

/// Salt and digest of a real bcrypt hash; no password maps to it in practice.
const DECOY_SALT_AND_DIGEST: &str = "R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW";

/// Well-formed hash at `cost`, verified against when the username is unknown.
fn decoy_hash(cost: u32) -> String {
    format!("$2b${cost:02}${DECOY_SALT_AND_DIGEST}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthOutcome {
    pub message: String,
    pub username: String,
}

async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    web::block(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::internal(format!("password hashing did not complete: {e}")))?
        .map_err(|e| AppError::internal(format!("password hashing failed: {e}")))
}

async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    web::block(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::internal(format!("password check did not complete: {e}")))?
        .map_err(|e| AppError::internal(format!("stored password hash is unusable: {e}")))
}

pub async fn register<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    auth: &AuthConfig,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<AuthOutcome, AppError> {
    let creds = normalize_credentials(username, password)?;
    let hash = hash_password(creds.password, auth.bcrypt_cost).await?;

    match users::create_user(conn, &creds.username, &hash).await {
        Ok(user) => {
            info!(
                user_id = user.id,
                username = %mask_username(&user.username),
                "user registered"
            );
            Ok(AuthOutcome {
                message: "Registration successful".to_string(),
                username: user.username,
            })
        }
        Err(DomainError::Conflict(ConflictKind::UsernameTaken, _)) => {
            warn!(
                username = %mask_username(&creds.username),
                "registration rejected: username taken"
            );
            Err(AppError::conflict(
                ErrorCode::UsernameTaken,
                "Username is already taken",
            ))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn login<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    auth: &AuthConfig,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<AuthOutcome, AppError> {
    let creds = normalize_credentials(username, password)?;
    let invalid = || AppError::unauthorized(ErrorCode::InvalidCredentials, INVALID_CREDENTIALS_DETAIL);

    let Some(user) = users::find_by_username(conn, &creds.username).await? else {
        verify_password(creds.password, decoy_hash(auth.bcrypt_cost)).await?;
        security::login_failed("unknown_user", &creds.username);
        return Err(invalid());
    };

    if !verify_password(creds.password, user.password_hash).await? {
        security::login_failed("bad_password", &creds.username);
        return Err(invalid());
    }

    info!(user_id = user.id, "login succeeded");
    Ok(AuthOutcome {
        message: "Login successful".to_string(),
        username: user.username,
    })
}
