//! Closed enumerations for standards, compliance answers, risk levels and
//! persisted schema versions.
//!
//! Every enum serializes to the exact spelling used in persisted audit logs
//! (`"ISO 27001"`, `"Partially Implemented"`, ...). `FromStr` accepts only
//! those spellings; anything else is rejected at the input boundary with
//! [`CoreError::InvalidValue`].

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Standard
// ---------------------------------------------------------------------------

/// Security standard a control belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Standard {
    #[serde(rename = "ISO 27001")]
    Iso27001,
    #[serde(rename = "ISO 27002")]
    Iso27002,
}

impl Standard {
    /// All standards, in the order a working set lists them.
    pub const ALL: [Self; 2] = [Self::Iso27001, Self::Iso27002];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iso27001 => "ISO 27001",
            Self::Iso27002 => "ISO 27002",
        }
    }

    /// Short suffix used in daily log file names (`27001`, `27002`).
    #[must_use]
    pub const fn file_suffix(self) -> &'static str {
        match self {
            Self::Iso27001 => "27001",
            Self::Iso27002 => "27002",
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Standard {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|standard| standard.as_str() == s)
            .ok_or_else(|| CoreError::invalid_value("Standard", s))
    }
}

// ---------------------------------------------------------------------------
// Compliance
// ---------------------------------------------------------------------------

/// Answer to "is this control implemented?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Compliance {
    Yes,
    No,
    #[serde(rename = "Partially Implemented")]
    PartiallyImplemented,
}

impl Compliance {
    pub const ALL: [Self; 3] = [Self::Yes, Self::No, Self::PartiallyImplemented];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::PartiallyImplemented => "Partially Implemented",
        }
    }

    /// A gap is a control explicitly answered `No`.
    #[must_use]
    pub const fn is_gap(self) -> bool {
        matches!(self, Self::No)
    }
}

impl fmt::Display for Compliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Compliance {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|value| value.as_str() == s)
            .ok_or_else(|| CoreError::invalid_value("Compliance", s))
    }
}

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Assessed risk attached to a control.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|value| value.as_str() == s)
            .ok_or_else(|| CoreError::invalid_value("Risk Level", s))
    }
}

// ---------------------------------------------------------------------------
// SchemaVersion
// ---------------------------------------------------------------------------

/// Column layout detected when a persisted table was loaded.
///
/// Decided once per table by the migrator:
///
/// ```text
/// all canonical columns present → canonical (passed through verbatim)
/// otherwise                     → legacy    (remapped, filled, reordered)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SchemaVersion {
    Canonical,
    Legacy,
}

impl SchemaVersion {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Canonical => "canonical",
            Self::Legacy => "legacy",
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
