//! Username/password input rules for register and login.

use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Trim the username and require both fields to be non-empty.
///
/// The password is taken as-is; whitespace is significant there.
pub fn normalize_credentials(
    username: Option<&str>,
    password: Option<&str>,
) -> Result<Credentials, DomainError> {
    let username = username.map(str::trim).unwrap_or_default();
    let password = password.unwrap_or_default();

    if username.is_empty() || password.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::MissingCredentials,
            "Username and password are required",
        ));
    }

    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}
