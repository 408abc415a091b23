//! # gts-config
//!
//! Layered configuration loading for the thesis registry using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GTS_*` prefix, `__` as separator)
//! 2. Project-level `.gts/config.toml`
//! 3. User-level `~/.config/gts/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GTS_SERVER__BIND` -> `server.bind`, `GTS_DATABASE__PATH` -> `database.path`.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use gts_config::GtsConfig;
//!
//! let config = GtsConfig::load_with_dotenv().expect("config");
//! println!("listening on {}", config.server.bind);
//! ```

mod database;
mod error;
mod server;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use server::{Environment, ServerConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GtsConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl GtsConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is normal.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.server.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so callers (the CLI, tests) can merge extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".gts/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("GTS_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gts").join("config.toml"))
    }
}
