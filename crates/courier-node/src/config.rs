//! Node configuration.
//!
//! Loaded from an optional TOML file named by `COURIER_CONFIG`; the bind
//! address can then be overridden with `COURIER_ADDR`. Every field has a
//! default, so an empty file (or no file) is a valid configuration.
//!
//! ```toml
//! bind_addr = "127.0.0.1:8080"
//! log_filter = "courier_node=debug,tower_http=info"
//!
//! [planner]
//! max_points = 5000
//! ```

use std::env;
use std::net::SocketAddr;
use std::path::Path;

use courier_planner::PlannerConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming the TOML config file.
pub const CONFIG_PATH_ENV: &str = "COURIER_CONFIG";

/// Environment variable overriding the bind address.
pub const BIND_ADDR_ENV: &str = "COURIER_ADDR";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level node configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,

    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,

    /// Settings handed to the route planner.
    pub planner: PlannerConfig,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            log_filter: "courier_node=info,courier_planner=info,tower_http=info".to_string(),
            planner: PlannerConfig::default(),
        }
    }
}

impl NodeConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: NodeConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Build configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::load(path)?,
            Err(_) => Self::default(),
        };
        config.with_bind_override(env::var(BIND_ADDR_ENV).ok().as_deref())
    }

    /// Replace the bind address when an override is given.
    pub fn with_bind_override(mut self, addr: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(addr) = addr {
            self.bind_addr = addr
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("invalid bind address '{}'", addr)))?;
        }
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.planner.max_points == 0 {
            return Err(ConfigError::Invalid(
                "planner.max_points must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = NodeConfig::from_toml_str("").unwrap();
        assert_eq!(config, NodeConfig::default());
    }

    #[test]
    fn test_toml_overrides() {
        let config = NodeConfig::from_toml_str(
            r#"
            bind_addr = "127.0.0.1:8080"

            [planner]
            max_points = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(config.planner.max_points, 50);
        assert!(config.planner.reject_non_finite);
    }

    #[test]
    fn test_zero_max_points_rejected() {
        let result = NodeConfig::from_toml_str("[planner]\nmax_points = 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_bad_toml() {
        let result = NodeConfig::from_toml_str("bind_addr = 42");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_bind_override() {
        let config = NodeConfig::default()
            .with_bind_override(Some("127.0.0.1:9000"))
            .unwrap();
        assert_eq!(config.bind_addr.port(), 9000);

        let err = NodeConfig::default().with_bind_override(Some("not-an-addr"));
        assert!(matches!(err, Err(ConfigError::Invalid(_))));

        let unchanged = NodeConfig::default().with_bind_override(None).unwrap();
        assert_eq!(unchanged, NodeConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let result = NodeConfig::load("/definitely/not/here/courier.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
