//! Field-level checks shared by every create/patch payload.

use crate::errors::domain::DomainError;

/// Payloads that can reject themselves before touching the database.
pub trait Validate {
    fn validate(&self) -> Result<(), DomainError>;
}

pub fn require_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation_other(format!(
            "{field} must not be blank"
        )));
    }
    Ok(())
}

pub fn require_non_negative(field: &str, value: i32) -> Result<(), DomainError> {
    if value < 0 {
        return Err(DomainError::validation_other(format!(
            "{field} must be zero or greater, got {value}"
        )));
    }
    Ok(())
}

pub fn optional_text(field: &str, value: Option<&str>) -> Result<(), DomainError> {
    value.map_or(Ok(()), |v| require_text(field, v))
}

pub fn optional_non_negative(field: &str, value: Option<i32>) -> Result<(), DomainError> {
    value.map_or(Ok(()), |v| require_non_negative(field, v))
}
