use crate::config::auth::AuthConfig;
use crate::config::db::{DbProfile, PoolSettings};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    auth: AuthConfig,
    pool: PoolSettings,
    db_profile: Option<DbProfile>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            auth: AuthConfig::default(),
            pool: PoolSettings::default(),
            db_profile: None,
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    pub fn with_pool(mut self, pool: PoolSettings) -> Self {
        self.pool = pool;
        self
    }

    pub fn with_auth(mut self, auth: AuthConfig) -> Self {
        self.auth = auth;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db_profile {
            // single entrypoint: connect + migrate
            Some(profile) => {
                let conn = bootstrap_db(profile, self.pool).await?;
                Ok(AppState::new(conn, self.auth))
            }
            None => Ok(AppState::new_without_db(self.auth)),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
