//! # site-config
//!
//! Layered configuration loading for Siteline using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SITELINE_*` prefix, `__` as separator)
//! 2. Project-level `.siteline/config.toml`
//! 3. User-level `~/.config/siteline/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SITELINE_GENERAL__DEFAULT_GRANULARITY` -> `general.default_granularity`,
//! `SITELINE_GENERAL__MIN_BAR_WIDTH_PCT` -> `general.min_bar_width_pct`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use site_config::SitelineConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = SitelineConfig::load_with_dotenv().expect("config");
//!
//! // Or without dotenvy (env vars must already be set):
//! let config = SitelineConfig::load().expect("config");
//!
//! println!("default granularity: {}", config.general.default_granularity);
//! ```

mod error;
mod general;

pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SitelineConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SitelineConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`] if you need `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`SITELINE_*` prefix)
    /// 2. `.siteline/config.toml` (project-local)
    /// 3. `~/.config/siteline/config.toml` (user-global)
    /// 4. Default values
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the working directory
    /// before building the figment. This is the typical entry point for the
    /// CLI and tests.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".siteline/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("SITELINE_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("siteline").join("config.toml"))
    }
}
