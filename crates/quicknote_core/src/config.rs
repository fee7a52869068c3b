//! Runtime configuration for the note server.
//!
//! # Responsibility
//! - Hold typed server/logging settings with stable defaults.
//! - Overlay `QUICKNOTE_*` environment variables on those defaults.
//!
//! # Invariants
//! - `api_prefix` always starts with `/` and never ends with `/`.
//! - A config returned by `from_env` has passed `validate()`.

use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_HOST: &str = "QUICKNOTE_HOST";
pub const ENV_PORT: &str = "QUICKNOTE_PORT";
pub const ENV_API_PREFIX: &str = "QUICKNOTE_API_PREFIX";
pub const ENV_LOG_LEVEL: &str = "QUICKNOTE_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "QUICKNOTE_LOG_DIR";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_API_PREFIX: &str = "/api/v1";

/// Configuration error for invalid or unparsable settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, value } => {
                write!(f, "invalid value `{value}` for `{key}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Server and logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Path prefix under which note routes are mounted.
    pub api_prefix: String,
    pub log_level: String,
    /// Rolling log file directory. `None` logs to stderr only.
    pub log_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl ServerConfig {
    /// Loads defaults overlaid with process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads defaults overlaid with values returned by `lookup`.
    ///
    /// Blank values are ignored so an exported-but-empty variable keeps the
    /// default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(host) = read(ENV_HOST) {
            config.host = host;
        }
        if let Some(port) = read(ENV_PORT) {
            config.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_PORT,
                value: port.clone(),
            })?;
        }
        if let Some(prefix) = read(ENV_API_PREFIX) {
            config.api_prefix = prefix;
        }
        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        if let Some(dir) = read(ENV_LOG_DIR) {
            config.log_dir = Some(PathBuf::from(dir));
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: ENV_HOST,
                value: self.host.clone(),
            });
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidValue {
                key: ENV_PORT,
                value: self.port.to_string(),
            });
        }
        if !self.api_prefix.starts_with('/') || self.api_prefix.ends_with('/') {
            return Err(ConfigError::InvalidValue {
                key: ENV_API_PREFIX,
                value: self.api_prefix.clone(),
            });
        }
        Ok(())
    }

    /// `host:port` string used for binding and diagnostics.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ServerConfig, ENV_API_PREFIX, ENV_LOG_DIR, ENV_PORT};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_mount_under_api_v1() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.api_prefix, "/api/v1");
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
    }

    #[test]
    fn env_values_override_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (ENV_PORT, "8088"),
            (ENV_LOG_DIR, "/var/log/quicknote"),
            (ENV_API_PREFIX, "  "),
        ]))
        .unwrap();
        assert_eq!(config.port, 8088);
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/quicknote")));
        assert_eq!(config.api_prefix, "/api/v1");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[(ENV_PORT, "http")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: ENV_PORT,
                value: "http".to_string()
            }
        );
        assert!(ServerConfig::from_lookup(lookup_from(&[(ENV_PORT, "0")])).is_err());
    }

    #[test]
    fn prefix_must_start_with_slash_and_not_end_with_one() {
        for bad in ["api", "/api/"] {
            let result = ServerConfig::from_lookup(lookup_from(&[(ENV_API_PREFIX, bad)]));
            assert!(result.is_err(), "prefix `{bad}` should be rejected");
        }
    }
}
