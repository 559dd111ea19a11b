use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Postgres constraint detail: `Key (username)=(alice) already exists.`
static KEY_DETAIL: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"Key \(([^)]*)\)=\(([^)]*)\)").unwrap()
});

/// bcrypt hashes (`$2a$`, `$2b$`, `$2y$` prefixes).
static BCRYPT_HASH: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\$2[aby]?\$\d{2}\$[./A-Za-z0-9]{53}").unwrap()
});

/// Long opaque tokens (hex or base64-like, 24+ chars).
static OPAQUE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\b[A-Za-z0-9+/]{24,}={0,2}").unwrap()
});

/// Mask values that may identify a user before they reach the logs.
///
/// Constraint details keep the column list and lose the value; password
/// hashes and long tokens are replaced wholesale.
pub fn redact(input: &str) -> String {
    let keys = KEY_DETAIL.replace_all(input, "Key ($1)=([REDACTED])");
    let hashes = BCRYPT_HASH.replace_all(&keys, "[REDACTED_HASH]");
    OPAQUE_TOKEN
        .replace_all(&hashes, "[REDACTED_TOKEN]")
        .to_string()
}

/// Mask a username, keeping only its first character.
pub fn mask_username(username: &str) -> String {
    match username.chars().next() {
        Some(first) => format!("{first}***"),
        None => String::new(),
    }
}

/// Display wrapper that runs [`redact`] when formatted.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
