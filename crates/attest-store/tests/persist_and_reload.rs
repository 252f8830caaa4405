//! End-to-end persistence: write, collide, reload, reconcile.

use std::fs;
use std::path::Path;

use attest_core::entities::{AuditLog, AuditRecord, LoggedRecord};
use attest_core::enums::{Compliance, RiskLevel, SchemaVersion, Standard};
use attest_core::reconcile::WorkingSet;
use attest_core::session::{AuditSession, FixedClock, OrganizationName};
use attest_store::{LogStore, StoreError, load_log};
use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 18)
        .unwrap()
        .and_hms_micro_opt(9, 30, 0, 123_456)
        .unwrap()
}

fn acme() -> OrganizationName {
    OrganizationName::parse("Acme").unwrap()
}

fn answered_log() -> AuditLog {
    let session = AuditSession::new(acme(), Some("Dana".into()));
    let mut set = WorkingSet::assemble(&session, now(), |_| None);
    for draft in &mut set.drafts {
        draft.compliance = Some(Compliance::Yes);
    }
    set.drafts[1].compliance = Some(Compliance::No);
    set.drafts[1].evidence = "roles, \"informally\" assigned".into();
    AuditLog::new(acme(), now(), set.complete().unwrap())
}

fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn two_saves_in_one_second_produce_two_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = LogStore::with_clock(dir.path(), FixedClock(now()));
    let log = answered_log();

    let first = store.persist(&log).unwrap();
    let second = store.persist(&log).unwrap();

    assert_eq!(first.path, second.path);
    assert_eq!(first.backup, None);
    assert_eq!(
        files_in(dir.path()),
        vec![
            "Acme_audit_20261018_093000.csv".to_string(),
            "Acme_audit_20261018_093000_v20261018093000123456.csv".to_string(),
        ]
    );
    let backup = second.backup.unwrap();
    assert_eq!(
        fs::read_to_string(&backup).unwrap(),
        fs::read_to_string(&second.path).unwrap()
    );
}

#[test]
fn taken_backup_name_fails_without_touching_either_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = LogStore::with_clock(dir.path(), FixedClock(now()));
    let log = answered_log();

    store.persist(&log).unwrap();
    let second = store.persist(&log).unwrap();
    let backup = second.backup.clone().unwrap();
    fs::write(&second.path, "sentinel").unwrap();

    let err = store.persist(&log).unwrap_err();

    assert!(matches!(err, StoreError::Write { .. }), "{err:?}");
    assert_eq!(fs::read_to_string(&second.path).unwrap(), "sentinel");
    assert!(backup.exists());
    assert_eq!(files_in(dir.path()).len(), 2);
}

#[cfg(unix)]
#[test]
fn failed_retire_rename_leaves_existing_log_untouched() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let store = LogStore::with_clock(dir.path(), FixedClock(now()));
    let log = answered_log();
    let first = store.persist(&log).unwrap();
    let before = fs::read_to_string(&first.path).unwrap();

    fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o555)).unwrap();
    // Privileged users ignore directory permissions; nothing to check then.
    let privileged = fs::write(dir.path().join(".writable"), "").is_ok();
    let result = if privileged {
        None
    } else {
        Some(store.persist(&log))
    };
    fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o755)).unwrap();

    let Some(result) = result else {
        return;
    };
    let err = result.unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }), "{err:?}");
    assert_eq!(fs::read_to_string(&first.path).unwrap(), before);
    assert_eq!(files_in(dir.path()), vec!["Acme_audit_20261018_093000.csv".to_string()]);
}

#[test]
fn directory_that_is_a_file_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("audit_logs");
    fs::write(&blocker, "not a directory").unwrap();
    let store = LogStore::with_clock(&blocker, FixedClock(now()));

    let err = store.persist(&answered_log()).unwrap_err();

    assert!(matches!(err, StoreError::Write { .. }), "{err:?}");
}

#[test]
fn persisted_log_reloads_as_canonical_records() {
    let dir = tempfile::tempdir().unwrap();
    let store = LogStore::with_clock(dir.path(), FixedClock(now()));
    let log = answered_log();

    let persisted = store.persist(&log).unwrap();
    let reloaded = load_log(&persisted.path).unwrap();

    assert_eq!(reloaded.version, SchemaVersion::Canonical);
    let expected: Vec<LoggedRecord> = log.records.iter().cloned().map(Into::into).collect();
    assert_eq!(reloaded.records, expected);
}

#[test]
fn daily_files_feed_the_next_draft() {
    let dir = tempfile::tempdir().unwrap();
    let store = LogStore::with_clock(dir.path(), FixedClock(now()));
    let log = answered_log();

    for standard in Standard::ALL {
        store.persist_daily(&log, standard).unwrap();
    }
    let today = now().date();
    let priors: Vec<_> = Standard::ALL
        .into_iter()
        .map(|standard| {
            store
                .load_prior(&acme(), standard, today)
                .unwrap()
                .unwrap()
        })
        .collect();

    let session = AuditSession::new(acme(), None);
    let set = WorkingSet::assemble(&session, now(), |standard| {
        let index = Standard::ALL.iter().position(|s| *s == standard)?;
        Some(priors[index].records.as_slice())
    });

    assert_eq!(set.drafts.len(), log.records.len());
    assert!(set.drafts.iter().all(|draft| draft.is_answered()));
    assert_eq!(set.drafts[1].compliance, Some(Compliance::No));
    assert_eq!(set.drafts[1].evidence, "roles, \"informally\" assigned");
    assert_eq!(set.auditor, "N/A");
}

#[test]
fn legacy_daily_file_is_migrated_and_reconciled() {
    let dir = tempfile::tempdir().unwrap();
    let store = LogStore::with_clock(dir.path(), FixedClock(now()));
    let path = store.daily_path(&acme(), Standard::Iso27001, now().date());
    fs::write(
        &path,
        "Framework,Control,Status,Risk,Remarks\n\
         ISO 27001,A.5.1,Partially Implemented,High,draft only\n",
    )
    .unwrap();

    let prior = store
        .load_prior(&acme(), Standard::Iso27001, now().date())
        .unwrap()
        .unwrap();
    assert_eq!(prior.version, SchemaVersion::Legacy);

    let session = AuditSession::new(acme(), None);
    let set = WorkingSet::assemble(&session, now(), |standard| {
        (standard == Standard::Iso27001).then_some(prior.records.as_slice())
    });

    let first = &set.drafts[0];
    assert_eq!(first.control_id, "A.5.1");
    assert_eq!(first.compliance, Some(Compliance::PartiallyImplemented));
    assert_eq!(first.risk_level, RiskLevel::High);
    assert_eq!(first.evidence, "draft only");
    assert_eq!(set.drafts[1].compliance, None);
}

#[test]
fn corrupt_daily_file_is_a_parse_error_not_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = LogStore::with_clock(dir.path(), FixedClock(now()));
    let path = store.daily_path(&acme(), Standard::Iso27002, now().date());
    fs::write(&path, "Control ID,Compliance\n5.1,Yes,extra\n").unwrap();

    let err = store
        .load_prior(&acme(), Standard::Iso27002, now().date())
        .unwrap_err();

    assert!(matches!(err, StoreError::Parse { .. }), "{err:?}");
}

#[test]
fn persisted_rows_follow_working_set_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = LogStore::with_clock(dir.path(), FixedClock(now()));
    let log = answered_log();

    let persisted = store.persist(&log).unwrap();
    let reloaded = load_log(&persisted.path).unwrap();

    let ids: Vec<&str> = reloaded
        .records
        .iter()
        .map(|record| record.control_id.as_str())
        .collect();
    let expected: Vec<&str> = log
        .records
        .iter()
        .map(|record: &AuditRecord| record.control_id.as_str())
        .collect();
    assert_eq!(ids, expected);
    assert_eq!(persisted.rows, log.records.len());
}
