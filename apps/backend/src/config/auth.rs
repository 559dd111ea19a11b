use std::env;

use crate::error::AppError;

/// Password hashing settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthConfig {
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AuthConfig {
    /// Cheapest cost bcrypt accepts; keeps test suites fast.
    pub fn for_tests() -> Self {
        Self { bcrypt_cost: 4 }
    }

    pub fn from_env() -> Result<Self, AppError> {
        match env::var("BCRYPT_COST") {
            Ok(raw) => {
                let cost: u32 = raw.trim().parse().map_err(|_| {
                    AppError::config(format!("BCRYPT_COST must be a number, got '{raw}'"))
                })?;
                if !(4..=31).contains(&cost) {
                    return Err(AppError::config(format!(
                        "BCRYPT_COST must be between 4 and 31, got {cost}"
                    )));
                }
                Ok(Self { bcrypt_cost: cost })
            }
            Err(_) => Ok(Self::default()),
        }
    }
}
