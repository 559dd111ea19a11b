//! Test helpers for generating unique test data
//!
//! ULID suffixes keep names distinct across tests that share a database.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("team");
/// let b = unique_str("team");
/// assert_ne!(a, b);
/// assert!(a.starts_with("team-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique lower-case username that stays under typical column limits
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_username;
///
/// let name = unique_username("coach");
/// assert!(name.starts_with("coach_"));
/// assert_eq!(name, name.to_lowercase());
/// ```
pub fn unique_username(prefix: &str) -> String {
    let ulid = Ulid::new().to_string().to_lowercase();
    format!("{}_{}", prefix, &ulid[ulid.len() - 10..])
}
