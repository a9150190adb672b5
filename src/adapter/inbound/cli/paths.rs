//! Path utilities for sarwatch.
//!
//! Configuration lives under `~/.sarwatch/`:
//! - `~/.sarwatch/config.toml` - main configuration
//! - `~/.sarwatch/.env` - credential template written by `config init`

use std::path::PathBuf;

/// Returns the sarwatch home directory (`~/.sarwatch/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".sarwatch")
}

/// Returns the default config file path (`~/.sarwatch/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Ensures the sarwatch home directory exists.
pub fn ensure_home_dir() -> std::io::Result<()> {
    std::fs::create_dir_all(home_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_lives_under_sarwatch_home() {
        let config = default_config();
        assert!(config.starts_with(home_dir()));
        assert!(config.to_string_lossy().contains(".sarwatch"));
        assert!(config.ends_with("config.toml"));
    }
}
