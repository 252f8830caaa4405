//! Command-line spellings of the core enums.
//!
//! The log spellings ("ISO 27001", "Partially Implemented") are awkward to
//! type, so flags accept short kebab-case forms and convert.

use attest_core::enums::{Compliance, RiskLevel, Standard};
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum StandardArg {
    #[value(name = "27001")]
    Iso27001,
    #[value(name = "27002")]
    Iso27002,
}

impl From<StandardArg> for Standard {
    fn from(value: StandardArg) -> Self {
        match value {
            StandardArg::Iso27001 => Self::Iso27001,
            StandardArg::Iso27002 => Self::Iso27002,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ComplianceArg {
    Yes,
    No,
    #[value(alias = "partial")]
    PartiallyImplemented,
}

impl From<ComplianceArg> for Compliance {
    fn from(value: ComplianceArg) -> Self {
        match value {
            ComplianceArg::Yes => Self::Yes,
            ComplianceArg::No => Self::No,
            ComplianceArg::PartiallyImplemented => Self::PartiallyImplemented,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum RiskArg {
    Low,
    Medium,
    High,
}

impl From<RiskArg> for RiskLevel {
    fn from(value: RiskArg) -> Self {
        match value {
            RiskArg::Low => Self::Low,
            RiskArg::Medium => Self::Medium,
            RiskArg::High => Self::High,
        }
    }
}
