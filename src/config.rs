//! Application configuration loaded from environment variables.

use serde::Deserialize;

use crate::error::Result;

/// Build identifier reported when `GIT_SHA` is unset or empty.
pub const UNKNOWN_SHA: &str = "unknown";

/// Application configuration loaded from environment variables.
///
/// Field names map to upper-cased variable names (`port` reads `PORT`).
/// Values are read once at startup and held for the lifetime of the
/// process; they are never re-read per request.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP listener port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Build identifier of the deployed revision, usually a commit hash.
    #[serde(default)]
    pub git_sha: Option<String>,

    /// Environment label (development, staging, production). Only used
    /// in the startup log line.
    #[serde(default = "default_app_env")]
    pub app_env: String,
}

fn default_port() -> u16 {
    8080
}

fn default_app_env() -> String {
    "development".to_string()
}

impl Config {
    /// Load configuration from environment, reading a `.env` file first.
    ///
    /// A `PORT` value that does not parse as a `u16` is a fatal
    /// configuration error rather than a silent fallback.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// The effective build identifier: `GIT_SHA` if set and non-empty,
    /// `"unknown"` otherwise.
    pub fn sha(&self) -> &str {
        match self.git_sha.as_deref() {
            Some(sha) if !sha.is_empty() => sha,
            _ => UNKNOWN_SHA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn from_pairs(pairs: &[(&str, &str)]) -> std::result::Result<Config, envy::Error> {
        envy::from_iter(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())))
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.app_env, "development");
        assert_eq!(config.git_sha, None);
        assert_eq!(config.sha(), UNKNOWN_SHA);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = from_pairs(&[
            ("PORT", "9090"),
            ("GIT_SHA", "abc123"),
            ("APP_ENV", "production"),
        ])
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.sha(), "abc123");
        assert_eq!(config.app_env, "production");
    }

    #[test]
    fn malformed_port_is_rejected() {
        assert!(from_pairs(&[("PORT", "not-a-port")]).is_err());
        assert!(from_pairs(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn empty_sha_falls_back_to_unknown() {
        let config = from_pairs(&[("GIT_SHA", "")]).unwrap();
        assert_eq!(config.sha(), UNKNOWN_SHA);
    }
}
