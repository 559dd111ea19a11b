use serde::Deserialize;

use crate::domain::validation::{optional_text, require_text, Validate};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Deserialize)]
pub struct RefereeCreate {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub certification_level: Option<String>,
}

/// Nullable columns use `Option<Option<_>>`: absent keeps the value,
/// `null` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RefereePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub experience: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub certification_level: Option<Option<String>>,
}

impl Validate for RefereeCreate {
    fn validate(&self) -> Result<(), DomainError> {
        require_text("first_name", &self.first_name)?;
        require_text("last_name", &self.last_name)
    }
}

impl Validate for RefereePatch {
    fn validate(&self) -> Result<(), DomainError> {
        optional_text("first_name", self.first_name.as_deref())?;
        optional_text("last_name", self.last_name.as_deref())
    }
}
