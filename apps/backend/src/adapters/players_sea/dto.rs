use serde::Deserialize;

use crate::domain::validation::{
    optional_non_negative, optional_text, require_non_negative, require_text, Validate,
};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerCreate {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub jersey_number: i32,
    pub team_id: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub jersey_number: Option<i32>,
    pub team_id: Option<i32>,
}

impl Validate for PlayerCreate {
    fn validate(&self) -> Result<(), DomainError> {
        require_text("first_name", &self.first_name)?;
        require_text("last_name", &self.last_name)?;
        require_non_negative("age", self.age)?;
        require_non_negative("jersey_number", self.jersey_number)
    }
}

impl Validate for PlayerPatch {
    fn validate(&self) -> Result<(), DomainError> {
        optional_text("first_name", self.first_name.as_deref())?;
        optional_text("last_name", self.last_name.as_deref())?;
        optional_non_negative("age", self.age)?;
        optional_non_negative("jersey_number", self.jersey_number)
    }
}
