use sea_orm::DatabaseConnection;

use crate::config::auth::AuthConfig;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent in tests that never touch the DB)
    db: Option<DatabaseConnection>,
    /// Password hashing settings
    pub auth: AuthConfig,
}

impl AppState {
    pub fn new(db: DatabaseConnection, auth: AuthConfig) -> Self {
        Self { db: Some(db), auth }
    }

    pub fn new_without_db(auth: AuthConfig) -> Self {
        Self { db: None, auth }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
