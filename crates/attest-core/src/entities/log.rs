use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::AuditRecord;
use crate::enums::Standard;
use crate::session::OrganizationName;

/// An immutable snapshot of a completed working set, ready to persist.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditLog {
    pub organization: OrganizationName,
    pub created_at: NaiveDateTime,
    pub records: Vec<AuditRecord>,
}

impl AuditLog {
    #[must_use]
    pub fn new(
        organization: OrganizationName,
        created_at: NaiveDateTime,
        records: Vec<AuditRecord>,
    ) -> Self {
        Self {
            organization,
            created_at,
            records,
        }
    }

    /// Sub-log holding only the records of one standard, order preserved.
    #[must_use]
    pub fn for_standard(&self, standard: Standard) -> Self {
        Self {
            organization: self.organization.clone(),
            created_at: self.created_at,
            records: self
                .records
                .iter()
                .filter(|record| record.standard == standard)
                .cloned()
                .collect(),
        }
    }
}
