//! Explicit session context and the clock seam.
//!
//! Every core operation receives an [`AuditSession`] instead of reading
//! ambient state. The auditor identity and the current time are external
//! collaborators: the identity arrives as an optional display name, the time
//! through the [`Clock`] trait.

use std::fmt;

use chrono::{Local, NaiveDate, NaiveDateTime};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::CoreError;

/// Auditor recorded when the identity source has no display name.
pub const UNKNOWN_AUDITOR: &str = "N/A";

/// Organization name, validated for use as a file name segment.
///
/// Rejects empty names, path separators and control characters. Names are
/// never rewritten: an unusable name is an error, not a silent fix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct OrganizationName(String);

impl OrganizationName {
    /// Validate `name`. The name is kept exactly as given.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidOrganization` if the name is blank, has
    /// leading or trailing whitespace, is `.` or `..`, or contains `/`, `\`,
    /// or a control character.
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        let trimmed = name.trim();
        let reject = |reason: &str| CoreError::InvalidOrganization {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if trimmed.is_empty() {
            return Err(reject("name is empty"));
        }
        if trimmed.len() != name.len() {
            return Err(reject("leading or trailing whitespace is not allowed"));
        }
        if trimmed.contains(['/', '\\']) {
            return Err(reject("path separators are not allowed"));
        }
        if trimmed.chars().any(char::is_control) {
            return Err(reject("control characters are not allowed"));
        }
        if trimmed == "." || trimmed == ".." {
            return Err(reject("relative path components are not allowed"));
        }

        Ok(Self(name.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrganizationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OrganizationName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Who is auditing which organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditSession {
    organization: OrganizationName,
    auditor: String,
}

impl AuditSession {
    /// Build a session. A missing or blank auditor becomes [`UNKNOWN_AUDITOR`].
    #[must_use]
    pub fn new(organization: OrganizationName, auditor: Option<String>) -> Self {
        let auditor = auditor
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_AUDITOR.to_string());
        Self {
            organization,
            auditor,
        }
    }

    #[must_use]
    pub const fn organization(&self) -> &OrganizationName {
        &self.organization
    }

    #[must_use]
    pub fn auditor(&self) -> &str {
        &self.auditor
    }
}

/// Source of the current wall-clock time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant. Used to replay same-second saves.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
