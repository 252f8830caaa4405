//! Schema migration for persisted audit tables.
//!
//! The canonical-columns predicate is evaluated once per table and recorded
//! as a [`SchemaVersion`]:
//!
//! ```text
//! canonical: every canonical column present → table passed through verbatim
//! legacy:    rename via LEGACY_COLUMN_MAP → fill missing with "" → reorder
//! ```
//!
//! Rows are never dropped. Typed records are produced afterwards by
//! [`MigratedTable::records`], which is where enum cells are validated.

use std::path::Path;

use attest_core::entities::{AuditRecord, LoggedRecord};
use attest_core::enums::SchemaVersion;
use attest_core::errors::CoreError;

use crate::error::StoreError;
use crate::table::RawTable;

/// Canonical column set, in persisted order.
pub const CANONICAL_COLUMNS: [&str; 9] = [
    "Organization",
    "Standard",
    "Control ID",
    "Control Name",
    "Compliance",
    "Risk Level",
    "Evidence/Remarks",
    "Remediation Plan",
    "Auditor",
];

/// Legacy column name → canonical column name.
///
/// A rename only applies when the canonical column is not already present;
/// when several legacy names map to one canonical column the first listed wins.
pub const LEGACY_COLUMN_MAP: &[(&str, &str)] = &[
    ("Org", "Organization"),
    ("Company", "Organization"),
    ("Framework", "Standard"),
    ("Control", "Control ID"),
    ("ID", "Control ID"),
    ("Name", "Control Name"),
    ("Status", "Compliance"),
    ("Implemented", "Compliance"),
    ("Risk", "Risk Level"),
    ("Evidence", "Evidence/Remarks"),
    ("Remarks", "Evidence/Remarks"),
    ("Remediation", "Remediation Plan"),
    ("User", "Auditor"),
    ("Username", "Auditor"),
];

/// A table guaranteed to contain every canonical column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigratedTable {
    pub version: SchemaVersion,
    pub table: RawTable,
}

/// Whether `table` already carries the full canonical column set.
#[must_use]
pub fn is_canonical(table: &RawTable) -> bool {
    CANONICAL_COLUMNS
        .iter()
        .all(|column| table.has_column(column))
}

/// Normalize `table` to the canonical column set.
#[must_use]
pub fn migrate(table: RawTable) -> MigratedTable {
    if is_canonical(&table) {
        return MigratedTable {
            version: SchemaVersion::Canonical,
            table,
        };
    }

    let mut headers = table.headers;
    for &(legacy, canonical) in LEGACY_COLUMN_MAP {
        if headers.iter().any(|header| header == canonical) {
            continue;
        }
        if let Some(position) = headers.iter().position(|header| header == legacy) {
            headers[position] = canonical.to_string();
        }
    }

    let sources: Vec<Option<usize>> = CANONICAL_COLUMNS
        .iter()
        .map(|column| headers.iter().position(|header| header == column))
        .collect();

    let rows = table
        .rows
        .into_iter()
        .map(|row| {
            sources
                .iter()
                .map(|source| {
                    source
                        .and_then(|index| row.get(index).cloned())
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect();

    MigratedTable {
        version: SchemaVersion::Legacy,
        table: RawTable::new(canonical_headers(), rows),
    }
}

/// Load `path` and migrate it.
///
/// # Errors
///
/// `MissingFile` if `path` does not exist, `Parse` if it is not a table.
pub fn migrate_file(path: &Path) -> Result<MigratedTable, StoreError> {
    let migrated = migrate(RawTable::read_path(path)?);
    if migrated.version == SchemaVersion::Legacy {
        tracing::warn!(
            path = %path.display(),
            rows = migrated.table.len(),
            "converted audit log from legacy column layout"
        );
    } else {
        tracing::debug!(
            path = %path.display(),
            rows = migrated.table.len(),
            "audit log already canonical"
        );
    }
    Ok(migrated)
}

impl MigratedTable {
    /// Typed records, one per row, in table order.
    ///
    /// Empty enum cells become `None`. Any other value that is not an exact
    /// enum spelling is rejected.
    ///
    /// # Errors
    ///
    /// `Parse` naming the row and column of the first invalid cell.
    pub fn records(&self, path: &Path) -> Result<Vec<LoggedRecord>, StoreError> {
        let columns = self.column_indices(path)?;

        self.table
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| -> Result<LoggedRecord, StoreError> {
                let cell = |column: usize| row.get(columns[column]).map_or("", String::as_str);
                let invalid = |error: CoreError| {
                    StoreError::parse(path, format!("row {}: {error}", index + 1))
                };

                Ok(LoggedRecord {
                    organization: cell(0).to_string(),
                    standard: optional(cell(1))
                        .map(str::parse)
                        .transpose()
                        .map_err(invalid)?,
                    control_id: cell(2).to_string(),
                    control_name: cell(3).to_string(),
                    compliance: optional(cell(4))
                        .map(str::parse)
                        .transpose()
                        .map_err(invalid)?,
                    risk_level: optional(cell(5))
                        .map(str::parse)
                        .transpose()
                        .map_err(invalid)?,
                    evidence: cell(6).to_string(),
                    remediation_plan: cell(7).to_string(),
                    auditor: cell(8).to_string(),
                })
            })
            .collect()
    }

    fn column_indices(&self, path: &Path) -> Result<[usize; 9], StoreError> {
        let mut indices = [0usize; 9];
        for (slot, column) in indices.iter_mut().zip(CANONICAL_COLUMNS) {
            *slot = self
                .table
                .column_index(column)
                .ok_or_else(|| StoreError::parse(path, format!("missing column {column:?}")))?;
        }
        Ok(indices)
    }
}

/// Encode finished records as a canonical table, order preserved.
#[must_use]
pub fn canonical_table(records: &[AuditRecord]) -> RawTable {
    let rows = records
        .iter()
        .map(|record| {
            vec![
                record.organization.clone(),
                record.standard.to_string(),
                record.control_id.clone(),
                record.control_name.clone(),
                record.compliance.to_string(),
                record.risk_level.to_string(),
                record.evidence.clone(),
                record.remediation_plan.clone(),
                record.auditor.clone(),
            ]
        })
        .collect();
    RawTable::new(canonical_headers(), rows)
}

fn canonical_headers() -> Vec<String> {
    CANONICAL_COLUMNS.iter().map(|column| (*column).to_string()).collect()
}

fn optional(cell: &str) -> Option<&str> {
    (!cell.is_empty()).then_some(cell)
}

#[cfg(test)]
mod tests {
    use attest_core::enums::{Compliance, RiskLevel, Standard};
    use pretty_assertions::assert_eq;

    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    fn canonical_row(control_id: &str, compliance: &str) -> Vec<String> {
        strings(&[
            "Acme",
            "ISO 27001",
            control_id,
            "Policy",
            compliance,
            "Medium",
            "signed policy",
            "",
            "Dana",
        ])
    }

    #[test]
    fn canonical_table_passes_through_verbatim() {
        let mut headers = strings(&CANONICAL_COLUMNS);
        headers.swap(0, 8);
        headers.push("Notes".into());
        let mut row = canonical_row("A.5.1", "Yes");
        row.swap(0, 8);
        row.push("extra".into());
        let table = RawTable::new(headers, vec![row]);

        let migrated = migrate(table.clone());

        assert_eq!(migrated.version, SchemaVersion::Canonical);
        assert_eq!(migrated.table, table);
    }

    #[test]
    fn legacy_table_gains_every_canonical_column() {
        let table = RawTable::new(
            strings(&["Control", "Status", "Remarks", "Comment"]),
            vec![
                strings(&["A.5.1", "Yes", "policy approved", "x"]),
                strings(&["A.5.2", "No", "", "y"]),
            ],
        );

        let migrated = migrate(table);

        assert_eq!(migrated.version, SchemaVersion::Legacy);
        assert_eq!(migrated.table.headers, strings(&CANONICAL_COLUMNS));
        assert_eq!(migrated.table.len(), 2);
        assert_eq!(
            migrated.table.rows[0],
            strings(&["", "", "A.5.1", "", "Yes", "", "policy approved", "", ""])
        );
    }

    #[test]
    fn rename_never_shadows_existing_canonical_column() {
        let table = RawTable::new(
            strings(&["Control ID", "Control", "Evidence", "Remarks"]),
            vec![strings(&["A.5.1", "ignored", "first", "second"])],
        );

        let migrated = migrate(table);
        let row = &migrated.table.rows[0];

        assert_eq!(row[2], "A.5.1");
        assert_eq!(row[6], "first");
    }

    #[test]
    fn short_rows_are_filled_not_dropped() {
        let table = RawTable::new(strings(&["Organization"]), vec![vec![], strings(&["Acme"])]);
        let migrated = migrate(table);
        assert_eq!(migrated.table.len(), 2);
        assert!(migrated.table.rows[0].iter().all(String::is_empty));
        assert_eq!(migrated.table.rows[1][0], "Acme");
    }

    #[test]
    fn migrating_twice_is_stable() {
        let table = RawTable::new(strings(&["Status"]), vec![strings(&["Yes"])]);
        let once = migrate(table);
        let twice = migrate(once.table.clone());
        assert_eq!(twice.version, SchemaVersion::Canonical);
        assert_eq!(twice.table, once.table);
    }

    #[test]
    fn records_are_typed() {
        let migrated = migrate(RawTable::new(
            strings(&CANONICAL_COLUMNS),
            vec![canonical_row("A.5.1", "Partially Implemented")],
        ));

        let records = migrated.records(Path::new("log.csv")).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].standard, Some(Standard::Iso27001));
        assert_eq!(records[0].compliance, Some(Compliance::PartiallyImplemented));
        assert_eq!(records[0].risk_level, Some(RiskLevel::Medium));
        assert_eq!(records[0].evidence, "signed policy");
    }

    #[test]
    fn empty_enum_cells_are_none() {
        let migrated = migrate(RawTable::new(
            strings(&["Control ID"]),
            vec![strings(&["A.5.1"])],
        ));
        let records = migrated.records(Path::new("log.csv")).unwrap();
        assert_eq!(records[0].standard, None);
        assert_eq!(records[0].compliance, None);
        assert_eq!(records[0].risk_level, None);
    }

    #[test]
    fn unknown_enum_spelling_is_rejected() {
        let migrated = migrate(RawTable::new(
            strings(&CANONICAL_COLUMNS),
            vec![canonical_row("A.5.1", "Yes"), canonical_row("A.5.2", "Maybe")],
        ));

        let err = migrated.records(Path::new("log.csv")).unwrap_err();
        match err {
            StoreError::Parse { reason, .. } => {
                assert!(reason.starts_with("row 2:"), "{reason}");
                assert!(reason.contains("Maybe"), "{reason}");
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn canonical_table_encodes_in_column_order() {
        let record = AuditRecord {
            organization: "Acme".into(),
            standard: Standard::Iso27002,
            control_id: "5.1".into(),
            control_name: "Policy".into(),
            compliance: Compliance::PartiallyImplemented,
            risk_level: RiskLevel::High,
            evidence: "draft".into(),
            remediation_plan: "approve".into(),
            auditor: "N/A".into(),
        };

        let table = canonical_table(&[record]);
        assert_eq!(table.headers, strings(&CANONICAL_COLUMNS));
        assert_eq!(
            table.rows[0],
            strings(&[
                "Acme",
                "ISO 27002",
                "5.1",
                "Policy",
                "Partially Implemented",
                "High",
                "draft",
                "approve",
                "N/A"
            ])
        );
    }
}
