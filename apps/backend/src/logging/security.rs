use tracing::warn;

use crate::logging::pii::mask_username;
use crate::trace_ctx;

/// Security event for a rejected login. The username is masked.
pub fn login_failed(reason: &str, username: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        username = %mask_username(username),
        reason,
        "Authentication failure"
    );
}
