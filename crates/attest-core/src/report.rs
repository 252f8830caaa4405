//! Report engine: compliance percentage, category counts and gap analysis.
//!
//! [`summarize`] is a pure function over a finished working set. It never
//! touches the catalogue or the filesystem.

use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::AuditRecord;
use crate::enums::Compliance;
use crate::session::OrganizationName;

/// Number of records carrying one compliance answer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryCount {
    pub compliance: Compliance,
    pub count: usize,
}

/// Derived metrics for a finished working set.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Summary {
    pub total: usize,
    /// `100 * yes / total`, or `0` for an empty set. Not rounded.
    pub compliance_percentage: f64,
    /// Present answers in order of first appearance. Feeds proportion charts.
    pub category_counts: Vec<CategoryCount>,
    /// Records answered `No`, input order preserved.
    pub gaps: Vec<AuditRecord>,
}

impl Summary {
    /// Count for one answer, `0` when absent.
    #[must_use]
    pub fn count_of(&self, compliance: Compliance) -> usize {
        self.category_counts
            .iter()
            .find(|entry| entry.compliance == compliance)
            .map_or(0, |entry| entry.count)
    }

    /// Percentage with two decimals, as printed in reports (`33.33`).
    #[must_use]
    pub fn percentage_display(&self) -> String {
        format!("{:.2}", self.compliance_percentage)
    }
}

/// Compute the summary of `records`.
#[must_use]
pub fn summarize(records: &[AuditRecord]) -> Summary {
    let total = records.len();
    let mut category_counts: Vec<CategoryCount> = Vec::with_capacity(Compliance::ALL.len());

    for record in records {
        match category_counts
            .iter_mut()
            .find(|entry| entry.compliance == record.compliance)
        {
            Some(entry) => entry.count += 1,
            None => category_counts.push(CategoryCount {
                compliance: record.compliance,
                count: 1,
            }),
        }
    }

    let implemented = records
        .iter()
        .filter(|record| record.compliance == Compliance::Yes)
        .count();

    #[allow(clippy::cast_precision_loss)]
    let compliance_percentage = if total == 0 {
        0.0
    } else {
        implemented as f64 / total as f64 * 100.0
    };

    let gaps = records
        .iter()
        .filter(|record| record.compliance.is_gap())
        .cloned()
        .collect();

    Summary {
        total,
        compliance_percentage,
        category_counts,
        gaps,
    }
}

/// A summary labelled with the organization and generation time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Report {
    pub organization: OrganizationName,
    pub generated_at: NaiveDateTime,
    pub summary: Summary,
}

impl Report {
    #[must_use]
    pub fn new(
        organization: OrganizationName,
        generated_at: NaiveDateTime,
        records: &[AuditRecord],
    ) -> Self {
        Self {
            organization,
            generated_at,
            summary: summarize(records),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::enums::{RiskLevel, Standard};

    fn record(control_id: &str, compliance: Compliance) -> AuditRecord {
        AuditRecord {
            organization: "Acme".into(),
            standard: Standard::Iso27001,
            control_id: control_id.into(),
            control_name: format!("Control {control_id}"),
            compliance,
            risk_level: RiskLevel::Low,
            evidence: String::new(),
            remediation_plan: String::new(),
            auditor: "N/A".into(),
        }
    }

    fn records(answers: &[Compliance]) -> Vec<AuditRecord> {
        answers
            .iter()
            .enumerate()
            .map(|(index, answer)| record(&format!("A.5.{}", index + 1), *answer))
            .collect()
    }

    #[test]
    fn one_yes_two_no() {
        let summary = summarize(&records(&[Compliance::Yes, Compliance::No, Compliance::No]));

        assert_eq!(summary.total, 3);
        assert!((summary.compliance_percentage - 33.333_333).abs() < 1e-4);
        assert_eq!(summary.percentage_display(), "33.33");
        assert_eq!(summary.gaps.len(), 2);
        assert_eq!(summary.gaps[0].control_id, "A.5.2");
        assert_eq!(summary.gaps[1].control_id, "A.5.3");
    }

    #[test]
    fn empty_set_is_zero_percent() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.compliance_percentage.abs() < f64::EPSILON);
        assert!(summary.category_counts.is_empty());
        assert!(summary.gaps.is_empty());
        assert_eq!(summary.percentage_display(), "0.00");
    }

    #[test]
    fn partial_is_not_a_gap() {
        let summary = summarize(&records(&[
            Compliance::PartiallyImplemented,
            Compliance::PartiallyImplemented,
        ]));
        assert!(summary.gaps.is_empty());
        assert!(summary.compliance_percentage.abs() < f64::EPSILON);
    }

    #[test]
    fn category_counts_follow_first_appearance() {
        let summary = summarize(&records(&[
            Compliance::No,
            Compliance::PartiallyImplemented,
            Compliance::No,
            Compliance::Yes,
        ]));

        assert_eq!(
            summary.category_counts,
            vec![
                CategoryCount {
                    compliance: Compliance::No,
                    count: 2
                },
                CategoryCount {
                    compliance: Compliance::PartiallyImplemented,
                    count: 1
                },
                CategoryCount {
                    compliance: Compliance::Yes,
                    count: 1
                },
            ]
        );
    }

    #[rstest]
    #[case(&[Compliance::Yes])]
    #[case(&[Compliance::Yes, Compliance::Yes, Compliance::No, Compliance::PartiallyImplemented])]
    #[case(&[Compliance::No, Compliance::No, Compliance::No])]
    #[case(&[Compliance::PartiallyImplemented, Compliance::Yes, Compliance::No, Compliance::Yes, Compliance::Yes])]
    fn counts_partition_the_total(#[case] answers: &[Compliance]) {
        let summary = summarize(&records(answers));
        let yes = summary.count_of(Compliance::Yes);
        let partial = summary.count_of(Compliance::PartiallyImplemented);

        assert_eq!(summary.gaps.len() + partial + yes, summary.total);
        assert_eq!(summary.gaps.len(), summary.count_of(Compliance::No));

        #[allow(clippy::cast_precision_loss)]
        let expected = 100.0 * yes as f64 / answers.len() as f64;
        assert!((summary.compliance_percentage - expected).abs() < 1e-9);
    }

    #[test]
    fn report_wraps_summary() {
        let generated_at = chrono::NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let report = Report::new(
            OrganizationName::parse("Acme").unwrap(),
            generated_at,
            &records(&[Compliance::Yes]),
        );
        assert_eq!(report.organization.as_str(), "Acme");
        assert_eq!(report.summary.total, 1);
        assert!((report.summary.compliance_percentage - 100.0).abs() < f64::EPSILON);
    }
}
