//! # hub-config
//!
//! Layered configuration loading for TechHub using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TECHHUB_*` prefix, `__` as separator)
//! 2. Project-level `.techhub/config.toml`
//! 3. User-level `~/.config/techhub/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TECHHUB_API__BASE_URL` -> `api.base_url`,
//! `TECHHUB_STORE__BACKEND` -> `store.backend`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use hub_config::HubConfig;
//!
//! let config = HubConfig::load_with_dotenv().expect("config");
//! println!("API: {}", config.api.normalized_base_url());
//! ```

mod api;
mod error;
mod general;
mod store;

pub use api::{ApiConfig, DEFAULT_BASE_URL};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use store::{StoreBackend, StoreConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HubConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl HubConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".techhub/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TECHHUB_").split("__"))
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError::InvalidValue` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("techhub").join("config.toml"))
    }
}
