use serde::Deserialize;
use time::OffsetDateTime;

use crate::domain::validation::{optional_text, require_text, Validate};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Deserialize)]
pub struct MatchCreate {
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub location: String,
    pub league_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    #[serde(default)]
    pub referee_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchPatch {
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date: Option<OffsetDateTime>,
    pub location: Option<String>,
    pub league_id: Option<i32>,
    pub home_team_id: Option<i32>,
    pub away_team_id: Option<i32>,
    /// `null` unassigns the referee
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub referee_id: Option<Option<i32>>,
}

impl Validate for MatchCreate {
    fn validate(&self) -> Result<(), DomainError> {
        require_text("location", &self.location)?;
        crate::domain::ensure_distinct_teams(self.home_team_id, self.away_team_id)
    }
}

impl Validate for MatchPatch {
    fn validate(&self) -> Result<(), DomainError> {
        optional_text("location", self.location.as_deref())
    }
}
