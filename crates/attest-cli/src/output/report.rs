//! Table view of an audit report.

use attest_core::report::Report;

use crate::output::table::{TableOptions, render_entity_table};

/// Heading, category proportions, then the gap list.
pub fn render_report(report: &Report, options: TableOptions) -> String {
    let summary = &report.summary;
    let mut sections = vec![format!(
        "Audit report for {} ({})\nTotal controls: {}\nCompliance: {}%",
        report.organization,
        report.generated_at.format("%Y-%m-%d %H:%M:%S"),
        summary.total,
        summary.percentage_display()
    )];

    let counts = summary
        .category_counts
        .iter()
        .map(|entry| vec![entry.compliance.to_string(), entry.count.to_string()])
        .collect::<Vec<_>>();
    if !counts.is_empty() {
        sections.push(render_entity_table(&["compliance", "count"], &counts, options));
    }

    if summary.gaps.is_empty() {
        sections.push(String::from("No gaps."));
    } else {
        let gaps = summary
            .gaps
            .iter()
            .map(|record| {
                vec![
                    record.standard.to_string(),
                    record.control_id.clone(),
                    record.control_name.clone(),
                    record.risk_level.to_string(),
                    record.remediation_plan.clone(),
                ]
            })
            .collect::<Vec<_>>();
        sections.push(format!(
            "Gaps ({}):\n{}",
            gaps.len(),
            render_entity_table(
                &["standard", "control", "name", "risk", "remediation"],
                &gaps,
                options,
            )
        ));
    }

    sections.join("\n\n")
}
