//! Audit session defaults: who is audited, and by whom.

use attest_core::session::{AuditSession, OrganizationName};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Placeholder organization used until one is configured.
pub const DEFAULT_ORGANIZATION: &str = "Example Organization";

fn default_organization() -> String {
    DEFAULT_ORGANIZATION.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default = "default_organization")]
    pub organization: String,

    /// Display name recorded on every record. Unset means "N/A".
    #[serde(default)]
    pub auditor: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            organization: default_organization(),
            auditor: None,
        }
    }
}

impl SessionConfig {
    /// `false` while the organization is still the placeholder.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.organization.trim() != DEFAULT_ORGANIZATION
    }

    /// Build the session, with optional per-invocation overrides.
    ///
    /// # Errors
    ///
    /// `InvalidValue` if the organization is not usable in a file name.
    pub fn to_session(
        &self,
        organization: Option<&str>,
        auditor: Option<&str>,
    ) -> Result<AuditSession, ConfigError> {
        let name = organization.unwrap_or(&self.organization);
        let organization = OrganizationName::parse(name).map_err(|error| {
            ConfigError::InvalidValue {
                field: "session.organization".into(),
                reason: error.to_string(),
            }
        })?;
        let auditor = auditor.or(self.auditor.as_deref()).map(str::to_string);
        Ok(AuditSession::new(organization, auditor))
    }
}
