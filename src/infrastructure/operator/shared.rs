//! Shared helper routines for operator implementations.

use tracing::error;

use crate::error::{Error, Result};

pub(super) fn map_app_result(
    result: std::result::Result<u64, tokio::task::JoinError>,
) -> Result<u64> {
    match result {
        Ok(runs) => Ok(runs),
        Err(error) => {
            error!(error = %error, "Scheduler task join failed");
            Err(Error::Connection(error.to_string()))
        }
    }
}

/// Visible prefix of a masked value.
const MASK_PREFIX_CHARS: usize = 10;

/// Shown instead of the value of a password or secret.
pub(super) const SECRET_PLACEHOLDER: &str = "set (hidden)";

/// First ten characters followed by `...`.
pub(super) fn mask_token(token: &str) -> String {
    let head: String = token.chars().take(MASK_PREFIX_CHARS).collect();
    format!("{head}...")
}

/// Display form of a credential variable. Passwords and secrets are never
/// shown, not even in part.
pub(super) fn mask_variable(name: &str, value: &str) -> String {
    if name.ends_with("_PASSWORD") || name.ends_with("_SECRET") {
        SECRET_PLACEHOLDER.to_string()
    } else {
        mask_token(value)
    }
}

pub(super) fn env_present(name: &str) -> bool {
    std::env::var(name).is_ok_and(|value| !value.trim().is_empty())
}
