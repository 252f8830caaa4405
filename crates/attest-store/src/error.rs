//! Storage error types for attest-store.

use std::path::{Path, PathBuf};

use attest_core::errors::CoreError;
use thiserror::Error;

/// Errors from loading, migrating and persisting audit logs.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The load target does not exist. Benign for reconciliation.
    #[error("Audit log not found: {}", path.display())]
    MissingFile { path: PathBuf },

    /// The load target exists but is not a well-formed audit table.
    #[error("Failed to parse audit log {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    /// The load target exists but could not be read.
    #[error("Failed to read audit log {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The persist target (or its backup rename) could not be written.
    #[error("Failed to write audit log {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Domain validation failed (e.g. an unusable organization name).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// `true` for [`StoreError::MissingFile`].
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::MissingFile { .. })
    }

    pub(crate) fn parse(path: &Path, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub(crate) fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}
