use std::path::PathBuf;

use anyhow::Context;
use attest_config::AttestConfig;
use attest_core::session::{AuditSession, Clock, SystemClock};
use attest_schema::SchemaRegistry;
use attest_store::LogStore;

use crate::cli::GlobalFlags;

/// Shared resources for command handlers, built once per invocation.
pub struct AppContext {
    pub config: AttestConfig,
    pub store: LogStore,
    pub schemas: SchemaRegistry,
    pub clock: SystemClock,
}

impl AppContext {
    /// `--dir` wins over `store.log_dir`.
    #[must_use]
    pub fn init(config: AttestConfig, flags: &GlobalFlags) -> Self {
        let log_dir: PathBuf = flags
            .dir
            .clone()
            .unwrap_or_else(|| config.store.log_dir.clone());
        tracing::debug!(log_dir = %log_dir.display(), "resolved audit log directory");

        Self {
            store: LogStore::new(log_dir),
            schemas: SchemaRegistry::new(),
            clock: SystemClock,
            config,
        }
    }

    /// Session from config, with per-command overrides.
    pub fn session(
        &self,
        organization: Option<&str>,
        auditor: Option<&str>,
    ) -> anyhow::Result<AuditSession> {
        self.config
            .session
            .to_session(organization, auditor)
            .context("invalid audit session")
    }

    pub fn now(&self) -> chrono::NaiveDateTime {
        self.clock.now()
    }
}
