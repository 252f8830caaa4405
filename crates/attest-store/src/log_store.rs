//! Versioned audit log persistence.
//!
//! Every save writes a fresh file. When the target name is already taken
//! (two saves inside one second) the existing file is first renamed to a
//! backup carrying a microsecond timestamp:
//!
//! ```text
//! {log_dir}/{org}_audit_{YYYYMMDD_HHMMSS}.csv                 ← snapshot
//! {log_dir}/{org}_audit_{YYYYMMDD_HHMMSS}_v{YYYYMMDDHHMMSSffffff}.csv  ← retired
//! {log_dir}/{org}_audit_{27001|27002}_{YYYYMMDD}.csv          ← daily, read by draft
//! ```
//!
//! Retirement is a single rename, never a chain. If the backup name is also
//! taken the save fails and both files are left as they were.

use std::path::{Path, PathBuf};

use attest_core::entities::{AuditLog, LoggedRecord};
use attest_core::enums::{SchemaVersion, Standard};
use attest_core::responses::PersistedLog;
use attest_core::session::{Clock, OrganizationName, SystemClock};
use chrono::{NaiveDate, NaiveDateTime};

use crate::error::StoreError;
use crate::migrate::{canonical_table, migrate_file};

/// A prior log loaded for reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorLog {
    pub path: PathBuf,
    pub version: SchemaVersion,
    pub records: Vec<LoggedRecord>,
}

/// Load and migrate any persisted table.
///
/// # Errors
///
/// `MissingFile` if absent, `Parse` if malformed or holding an
/// unrecognised enum value, `Read` on other I/O failures.
pub fn load_log(path: &Path) -> Result<PriorLog, StoreError> {
    let migrated = migrate_file(path)?;
    let records = migrated.records(path)?;
    Ok(PriorLog {
        path: path.to_path_buf(),
        version: migrated.version,
        records,
    })
}

/// Reads and writes audit logs under one directory.
#[derive(Debug, Clone)]
pub struct LogStore<C: Clock = SystemClock> {
    dir: PathBuf,
    clock: C,
}

impl LogStore {
    /// Store rooted at `dir`, timestamped by the system clock.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_clock(dir, SystemClock)
    }
}

impl<C: Clock> LogStore<C> {
    #[must_use]
    pub fn with_clock(dir: impl Into<PathBuf>, clock: C) -> Self {
        Self {
            dir: dir.into(),
            clock,
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `{dir}/{org}_audit_{YYYYMMDD_HHMMSS}.csv`
    #[must_use]
    pub fn snapshot_path(&self, organization: &OrganizationName, now: NaiveDateTime) -> PathBuf {
        self.dir.join(format!(
            "{organization}_audit_{}.csv",
            now.format("%Y%m%d_%H%M%S")
        ))
    }

    /// `{dir}/{org}_audit_{suffix}_{YYYYMMDD}.csv`
    #[must_use]
    pub fn daily_path(
        &self,
        organization: &OrganizationName,
        standard: Standard,
        day: NaiveDate,
    ) -> PathBuf {
        self.dir.join(format!(
            "{organization}_audit_{}_{}.csv",
            standard.file_suffix(),
            day.format("%Y%m%d")
        ))
    }

    /// Write `log` as a new timestamped snapshot.
    ///
    /// # Errors
    ///
    /// `Write` if the directory cannot be created, the collision backup
    /// cannot be made, or the new file cannot be written.
    pub fn persist(&self, log: &AuditLog) -> Result<PersistedLog, StoreError> {
        let path = self.snapshot_path(&log.organization, self.clock.now());
        self.write_versioned(&path, log)
    }

    /// Write the records of `standard` to today's daily file, the one
    /// [`LogStore::load_prior`] reads back.
    ///
    /// # Errors
    ///
    /// Same as [`LogStore::persist`].
    pub fn persist_daily(
        &self,
        log: &AuditLog,
        standard: Standard,
    ) -> Result<PersistedLog, StoreError> {
        let path = self.daily_path(&log.organization, standard, self.clock.today());
        self.write_versioned(&path, &log.for_standard(standard))
    }

    /// Load the daily log of `standard` for `day`, if one was written.
    ///
    /// # Errors
    ///
    /// Anything [`load_log`] returns except `MissingFile`, which
    /// becomes `Ok(None)`.
    pub fn load_prior(
        &self,
        organization: &OrganizationName,
        standard: Standard,
        day: NaiveDate,
    ) -> Result<Option<PriorLog>, StoreError> {
        let path = self.daily_path(organization, standard, day);
        match load_log(&path) {
            Ok(prior) => {
                tracing::debug!(
                    path = %path.display(),
                    records = prior.records.len(),
                    version = %prior.version,
                    "loaded prior audit log"
                );
                Ok(Some(prior))
            }
            Err(error) if error.is_missing() => {
                tracing::debug!(path = %path.display(), "no prior audit log");
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    fn backup_path(&self, path: &Path) -> PathBuf {
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        path.with_file_name(format!(
            "{stem}_v{}.csv",
            self.clock.now().format("%Y%m%d%H%M%S%6f")
        ))
    }

    fn write_versioned(&self, path: &Path, log: &AuditLog) -> Result<PersistedLog, StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|error| StoreError::write(&self.dir, error))?;

        let backup = if path.exists() {
            let backup = self.backup_path(path);
            if backup.exists() {
                return Err(StoreError::write(
                    &backup,
                    std::io::Error::new(
                        std::io::ErrorKind::AlreadyExists,
                        "backup already exists; refusing to overwrite",
                    ),
                ));
            }
            std::fs::rename(path, &backup).map_err(|error| StoreError::write(path, error))?;
            tracing::info!(
                from = %path.display(),
                to = %backup.display(),
                "retired existing audit log"
            );
            Some(backup)
        } else {
            None
        };

        canonical_table(&log.records).write_new(path)?;
        tracing::info!(
            path = %path.display(),
            rows = log.records.len(),
            "persisted audit log"
        );

        Ok(PersistedLog {
            path: path.to_path_buf(),
            backup,
            rows: log.records.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use attest_core::session::FixedClock;
    use pretty_assertions::assert_eq;

    use super::*;

    fn acme() -> OrganizationName {
        OrganizationName::parse("Acme").unwrap()
    }

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2026, 10, 18)
                .unwrap()
                .and_hms_micro_opt(14, 5, 9, 42)
                .unwrap(),
        )
    }

    #[test]
    fn snapshot_path_uses_second_resolution() {
        let store = LogStore::with_clock("audit_logs", clock());
        assert_eq!(
            store.snapshot_path(&acme(), clock().0),
            PathBuf::from("audit_logs/Acme_audit_20261018_140509.csv")
        );
    }

    #[test]
    fn daily_path_carries_standard_suffix() {
        let store = LogStore::with_clock("audit_logs", clock());
        let day = clock().0.date();
        assert_eq!(
            store.daily_path(&acme(), Standard::Iso27002, day),
            PathBuf::from("audit_logs/Acme_audit_27002_20261018.csv")
        );
    }

    #[test]
    fn backup_path_appends_microsecond_version() {
        let store = LogStore::with_clock("audit_logs", clock());
        let path = store.snapshot_path(&acme(), clock().0);
        assert_eq!(
            store.backup_path(&path),
            PathBuf::from("audit_logs/Acme_audit_20261018_140509_v20261018140509000042.csv")
        );
    }

    #[test]
    fn load_prior_without_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::with_clock(dir.path(), clock());
        let prior = store
            .load_prior(&acme(), Standard::Iso27001, clock().0.date())
            .unwrap();
        assert_eq!(prior, None);
    }

    #[test]
    fn persist_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("logs");
        let store = LogStore::with_clock(&nested, clock());
        let log = AuditLog::new(acme(), clock().0, vec![]);

        let persisted = store.persist(&log).unwrap();

        assert!(persisted.path.starts_with(&nested));
        assert_eq!(persisted.rows, 0);
        assert_eq!(persisted.backup, None);
        let content = std::fs::read_to_string(&persisted.path).unwrap();
        assert_eq!(
            content,
            "Organization,Standard,Control ID,Control Name,Compliance,Risk Level,Evidence/Remarks,Remediation Plan,Auditor\n"
        );
    }
}
