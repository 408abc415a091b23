//! HTTP server configuration.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_bind() -> String {
    "127.0.0.1:3007".to_string()
}

fn default_cors_allowed_origins() -> Vec<String> {
    vec!["http://localhost:5173".to_string()]
}

/// Default request body limit (1 MiB).
const fn default_max_body_bytes() -> usize {
    1024 * 1024
}

/// Deployment mode. `Development` exposes error chains in 500 responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address, `host:port`.
    #[serde(default = "default_bind")]
    pub bind: String,

    #[serde(default)]
    pub environment: Environment,

    /// Origins that receive CORS headers. Credentials are always allowed for them.
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            environment: Environment::default(),
            cors_allowed_origins: default_cors_allowed_origins(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerConfig {
    /// Parse the bind address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `bind` is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind.parse().map_err(|e| ConfigError::InvalidValue {
            field: "server.bind".to_string(),
            reason: format!("'{}' is not a socket address: {e}", self.bind),
        })
    }

    /// Check field values that serde alone cannot reject.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_addr()?;
        if self.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.max_body_bytes".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if let Some(origin) = self.cors_allowed_origins.iter().find(|o| o.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "server.cors_allowed_origins".to_string(),
                reason: format!("empty origin entry '{origin}'"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ServerConfig::default();
        assert_eq!(config.bind, "127.0.0.1:3007");
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.cors_allowed_origins, vec!["http://localhost:5173"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_unparseable_bind() {
        let config = ServerConfig {
            bind: "localhost".to_string(),
            ..ServerConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.bind"));
    }

    #[test]
    fn rejects_zero_body_limit() {
        let config = ServerConfig {
            max_body_bytes: 0,
            ..ServerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "server.max_body_bytes"
        ));
    }
}
