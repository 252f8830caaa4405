use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Control;
use crate::enums::{Compliance, RiskLevel, Standard};
use crate::session::AuditSession;

/// A finished audit record: one answered catalogue control.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditRecord {
    pub organization: String,
    pub standard: Standard,
    pub control_id: String,
    pub control_name: String,
    pub compliance: Compliance,
    pub risk_level: RiskLevel,
    pub evidence: String,
    pub remediation_plan: String,
    pub auditor: String,
}

/// A working-set entry. `compliance` stays `None` until the UI answers it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DraftRecord {
    pub organization: String,
    pub standard: Standard,
    pub control_id: String,
    pub control_name: String,
    pub compliance: Option<Compliance>,
    pub risk_level: RiskLevel,
    pub evidence: String,
    pub remediation_plan: String,
    pub auditor: String,
}

impl DraftRecord {
    /// Fresh draft for a catalogue control with default answers.
    #[must_use]
    pub fn for_control(session: &AuditSession, standard: Standard, control: &Control) -> Self {
        Self {
            organization: session.organization().to_string(),
            standard,
            control_id: control.id.to_string(),
            control_name: control.name.to_string(),
            compliance: None,
            risk_level: RiskLevel::Low,
            evidence: String::new(),
            remediation_plan: String::new(),
            auditor: session.auditor().to_string(),
        }
    }

    /// Copy the answer fields of a prior record. Identity fields are left alone.
    pub fn prefill(&mut self, prior: &LoggedRecord) {
        self.compliance = prior.compliance;
        self.risk_level = prior.risk_level.unwrap_or_default();
        self.evidence.clone_from(&prior.evidence);
        self.remediation_plan.clone_from(&prior.remediation_plan);
    }

    #[must_use]
    pub const fn is_answered(&self) -> bool {
        self.compliance.is_some()
    }

    /// `"ISO 27001 A.5.1"`
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.standard, self.control_id)
    }

    /// The finished record, or `None` while compliance is unanswered.
    #[must_use]
    pub fn complete(&self) -> Option<AuditRecord> {
        let compliance = self.compliance?;
        Some(AuditRecord {
            organization: self.organization.clone(),
            standard: self.standard,
            control_id: self.control_id.clone(),
            control_name: self.control_name.clone(),
            compliance,
            risk_level: self.risk_level,
            evidence: self.evidence.clone(),
            remediation_plan: self.remediation_plan.clone(),
            auditor: self.auditor.clone(),
        })
    }
}

/// A record loaded from a persisted table after migration.
///
/// Columns that migration filled with an empty string come back as `None`;
/// any non-empty enum cell has already been validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoggedRecord {
    pub organization: String,
    pub standard: Option<Standard>,
    pub control_id: String,
    pub control_name: String,
    pub compliance: Option<Compliance>,
    pub risk_level: Option<RiskLevel>,
    pub evidence: String,
    pub remediation_plan: String,
    pub auditor: String,
}

impl LoggedRecord {
    /// Whether this row describes `control_id` of `standard`.
    #[must_use]
    pub fn matches(&self, standard: Standard, control_id: &str) -> bool {
        self.standard == Some(standard) && self.control_id == control_id
    }
}

impl From<AuditRecord> for LoggedRecord {
    fn from(record: AuditRecord) -> Self {
        Self {
            organization: record.organization,
            standard: Some(record.standard),
            control_id: record.control_id,
            control_name: record.control_name,
            compliance: Some(record.compliance),
            risk_level: Some(record.risk_level),
            evidence: record.evidence,
            remediation_plan: record.remediation_plan,
            auditor: record.auditor,
        }
    }
}
