//! # attest-config
//!
//! Layered configuration loading for Attest using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ATTEST_*` prefix, `__` as separator)
//! 2. Project-level `.attest/config.toml`
//! 3. User-level `~/.config/attest/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `ATTEST_STORE__LOG_DIR` -> `store.log_dir` and
//! `ATTEST_SESSION__AUDITOR` -> `session.auditor`.
//!
//! ```no_run
//! use attest_config::AttestConfig;
//!
//! let config = AttestConfig::load_with_dotenv().expect("config");
//! let session = config.session.to_session(None, None).expect("session");
//! println!("auditing {} into {}", session.organization(), config.store.log_dir.display());
//! ```

mod error;
mod session;
mod store;

pub use error::ConfigError;
pub use session::{DEFAULT_ORGANIZATION, SessionConfig};
pub use store::StoreConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".attest/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AttestConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl AttestConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; use [`AttestConfig::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// `Figment` if a source is malformed or a value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load `.env` from the working directory first, then [`AttestConfig::load`].
    ///
    /// # Errors
    ///
    /// Same as [`AttestConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is normal.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect it or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("ATTEST_").split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("attest").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = AttestConfig::default();
        assert_eq!(config.store.log_dir, PathBuf::from("audit_logs"));
        assert!(!config.session.is_configured());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: AttestConfig = AttestConfig::figment().extract()?;
            assert_eq!(config.store.log_dir, PathBuf::from("audit_logs"));
            assert_eq!(config.session.auditor, None);
            Ok(())
        });
    }
}
