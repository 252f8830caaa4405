//! Record reconciliation: merge a catalogue with a prior log.
//!
//! Reconciliation produces exactly one [`DraftRecord`] per catalogue control,
//! in catalogue order. Answers are prefilled from the first prior record
//! matching `(standard, control_id)`; identity fields always come from the
//! catalogue and the session.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalogue;
use crate::entities::{AuditRecord, Control, DraftRecord, LoggedRecord};
use crate::enums::{Compliance, RiskLevel, Standard};
use crate::errors::CoreError;
use crate::session::{AuditSession, OrganizationName};

/// Build the drafts for one standard.
#[must_use]
pub fn reconcile(
    catalogue: &[Control],
    standard: Standard,
    session: &AuditSession,
    prior: Option<&[LoggedRecord]>,
) -> Vec<DraftRecord> {
    let prior = prior.unwrap_or_default();
    let mut prefilled = 0usize;

    let drafts: Vec<DraftRecord> = catalogue
        .iter()
        .map(|control| {
            let mut draft = DraftRecord::for_control(session, standard, control);
            if let Some(found) = prior.iter().find(|row| row.matches(standard, control.id)) {
                draft.prefill(found);
                prefilled += 1;
            }
            draft
        })
        .collect();

    tracing::debug!(
        %standard,
        controls = drafts.len(),
        prefilled,
        prior_rows = prior.len(),
        "reconciled catalogue with prior log"
    );

    drafts
}

/// Answer fields the presentation layer may set on a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answer {
    pub compliance: Option<Compliance>,
    pub risk_level: Option<RiskLevel>,
    pub evidence: Option<String>,
    pub remediation_plan: Option<String>,
}

impl Answer {
    /// Apply the fields that are set; leave the rest untouched.
    pub fn apply_to(self, draft: &mut DraftRecord) {
        if let Some(compliance) = self.compliance {
            draft.compliance = Some(compliance);
        }
        if let Some(risk_level) = self.risk_level {
            draft.risk_level = risk_level;
        }
        if let Some(evidence) = self.evidence {
            draft.evidence = evidence;
        }
        if let Some(remediation_plan) = self.remediation_plan {
            draft.remediation_plan = remediation_plan;
        }
    }
}

/// The in-progress drafts of one audit session, covering every standard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WorkingSet {
    pub organization: OrganizationName,
    pub auditor: String,
    pub created_at: NaiveDateTime,
    pub drafts: Vec<DraftRecord>,
}

impl WorkingSet {
    /// Reconcile every standard against the static catalogue.
    ///
    /// `prior_for` supplies the prior log rows for a standard, if any.
    pub fn assemble<'a, F>(
        session: &AuditSession,
        created_at: NaiveDateTime,
        mut prior_for: F,
    ) -> Self
    where
        F: FnMut(Standard) -> Option<&'a [LoggedRecord]>,
    {
        let drafts = Standard::ALL
            .into_iter()
            .flat_map(|standard| {
                reconcile(
                    catalogue::controls(standard),
                    standard,
                    session,
                    prior_for(standard),
                )
            })
            .collect();

        Self {
            organization: session.organization().clone(),
            auditor: session.auditor().to_string(),
            created_at,
            drafts,
        }
    }

    /// Check that the drafts cover the catalogue exactly once.
    ///
    /// Working sets round-trip through user-edited JSON, so this runs before
    /// a set is reported on or persisted.
    ///
    /// # Errors
    ///
    /// Returns `UnknownControl`, `DuplicateControl`, `MissingControl`, or
    /// `Validation` when a draft's organization or auditor differs from the
    /// set's, or its control name differs from the catalogue.
    pub fn verify(&self) -> Result<(), CoreError> {
        let mut seen = HashSet::new();
        for draft in &self.drafts {
            let Some(control) = catalogue::find(draft.standard, &draft.control_id) else {
                return Err(CoreError::UnknownControl {
                    standard: draft.standard,
                    control_id: draft.control_id.clone(),
                });
            };
            if !seen.insert((draft.standard, draft.control_id.as_str())) {
                return Err(CoreError::DuplicateControl {
                    standard: draft.standard,
                    control_id: draft.control_id.clone(),
                });
            }
            if draft.organization != self.organization.as_str() {
                return Err(CoreError::Validation(format!(
                    "{} belongs to organization {:?}, expected {:?}",
                    draft.label(),
                    draft.organization,
                    self.organization.as_str()
                )));
            }
            if draft.control_name != control.name {
                return Err(CoreError::Validation(format!(
                    "{} is named {:?}, catalogue says {:?}",
                    draft.label(),
                    draft.control_name,
                    control.name
                )));
            }
            if draft.auditor != self.auditor {
                return Err(CoreError::Validation(format!(
                    "{} was drafted by {:?}, expected {:?}",
                    draft.label(),
                    draft.auditor,
                    self.auditor
                )));
            }
        }

        for standard in Standard::ALL {
            for control in catalogue::controls(standard) {
                if !seen.contains(&(standard, control.id)) {
                    return Err(CoreError::MissingControl {
                        standard,
                        control_id: control.id.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Find a draft by control id, optionally scoped to a standard.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if no draft matches or the id is ambiguous
    /// across standards.
    pub fn draft_mut(
        &mut self,
        standard: Option<Standard>,
        control_id: &str,
    ) -> Result<&mut DraftRecord, CoreError> {
        let positions: Vec<usize> = self
            .drafts
            .iter()
            .enumerate()
            .filter(|(_, draft)| {
                draft.control_id == control_id && standard.is_none_or(|s| draft.standard == s)
            })
            .map(|(index, _)| index)
            .collect();

        match positions.as_slice() {
            [index] => Ok(&mut self.drafts[*index]),
            [] => Err(CoreError::Validation(format!(
                "no draft for control {control_id}"
            ))),
            _ => Err(CoreError::Validation(format!(
                "control {control_id} exists in several standards; pass a standard"
            ))),
        }
    }

    /// Number of drafts with a compliance answer.
    #[must_use]
    pub fn answered(&self) -> usize {
        self.drafts.iter().filter(|draft| draft.is_answered()).count()
    }

    /// Turn every draft into a finished record.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Incomplete` listing every unanswered control.
    pub fn complete(&self) -> Result<Vec<AuditRecord>, CoreError> {
        let mut records = Vec::with_capacity(self.drafts.len());
        let mut missing = Vec::new();

        for draft in &self.drafts {
            match draft.complete() {
                Some(record) => records.push(record),
                None => missing.push(draft.label()),
            }
        }

        if missing.is_empty() {
            Ok(records)
        } else {
            Err(CoreError::Incomplete { controls: missing })
        }
    }
}
