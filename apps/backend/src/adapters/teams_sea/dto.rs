use serde::Deserialize;

use crate::domain::validation::{optional_text, require_text, Validate};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Deserialize)]
pub struct TeamCreate {
    pub name: String,
    pub coach_name: String,
    pub league_id: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamPatch {
    pub name: Option<String>,
    pub coach_name: Option<String>,
    pub league_id: Option<i32>,
}

impl Validate for TeamCreate {
    fn validate(&self) -> Result<(), DomainError> {
        require_text("name", &self.name)?;
        require_text("coach_name", &self.coach_name)
    }
}

impl Validate for TeamPatch {
    fn validate(&self) -> Result<(), DomainError> {
        optional_text("name", self.name.as_deref())?;
        optional_text("coach_name", self.coach_name.as_deref())
    }
}
