use std::env;

use crate::error::AppError;

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// `DATABASE_URL`, or the discrete `DB_*` variables
    Prod,
    /// `TEST_DATABASE_URL`; the database name must end with `_test`
    Test,
    /// Private in-memory SQLite database, migrated on connect
    InMemory,
}

impl DbProfile {
    pub fn is_sqlite_memory(self) -> bool {
        matches!(self, DbProfile::InMemory)
    }
}

/// Pool sizing read from the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout_ms: u64,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout_ms: 5_000,
        }
    }
}

impl PoolSettings {
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        Ok(Self {
            max_connections: parse_var("DB_POOL_MAX", defaults.max_connections)?,
            acquire_timeout_ms: parse_var("DB_ACQUIRE_TIMEOUT_MS", defaults.acquire_timeout_ms)?,
        })
    }
}

/// Resolve the connection string for a profile
pub fn db_url(profile: DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => match env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => Ok(url),
            _ => discrete_postgres_url(),
        },
        DbProfile::Test => {
            let url = must_var("TEST_DATABASE_URL")?;
            validate_test_database_url(&url)?;
            Ok(url)
        }
        DbProfile::InMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Build a Postgres URL from `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`
fn discrete_postgres_url() -> Result<String, AppError> {
    let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
    let username = must_var("DB_USER")?;
    let password = must_var("DB_PASSWORD")?;
    let db_name = must_var("DB_NAME")?;

    Ok(format!(
        "postgresql://{username}:{password}@{host}:{port}/{db_name}"
    ))
}

/// Guard against pointing the test profile at a real database
fn validate_test_database_url(database_url: &str) -> Result<(), AppError> {
    let Some(slash) = database_url.rfind('/') else {
        return Err(AppError::config(format!(
            "Invalid database URL format: '{database_url}'"
        )));
    };

    let tail = &database_url[slash + 1..];
    let db_name = tail.split('?').next().unwrap_or(tail);
    let db_name = db_name
        .strip_suffix(".db")
        .or_else(|| db_name.strip_suffix(".sqlite"))
        .unwrap_or(db_name);

    if !db_name.ends_with("_test") {
        return Err(AppError::config(format!(
            "Test profile requires database name to end with '_test', but got: '{db_name}'"
        )));
    }
    Ok(())
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("{name} must be a number, got '{raw}'"))),
        Err(_) => Ok(default),
    }
}
