use serde::Deserialize;

use crate::domain::validation::{optional_text, require_text, Validate};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueCreate {
    pub name: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaguePatch {
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl Validate for LeagueCreate {
    fn validate(&self) -> Result<(), DomainError> {
        require_text("name", &self.name)?;
        require_text("city", &self.city)?;
        require_text("country", &self.country)
    }
}

impl Validate for LeaguePatch {
    fn validate(&self) -> Result<(), DomainError> {
        optional_text("name", self.name.as_deref())?;
        optional_text("city", self.city.as_deref())?;
        optional_text("country", self.country.as_deref())
    }
}
