//! Log directory configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Directory audit logs are written to and read from.
fn default_log_dir() -> PathBuf {
    PathBuf::from("audit_logs")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Created on first save if missing.
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
        }
    }
}
