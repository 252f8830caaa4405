//! Cross-cutting error types for Attest.
//!
//! Storage errors (`StoreError`) live in `attest-store`; the CLI converges
//! everything into `anyhow`.

use thiserror::Error;

use crate::enums::Standard;

/// Errors raised by the pure core: validation at the input boundary and
/// working-set integrity checks.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string was not one of the accepted spellings of a closed enum.
    #[error("Invalid value for '{field}': {value:?}")]
    InvalidValue { field: String, value: String },

    /// Organization name cannot be used as a file name segment.
    #[error("Invalid organization name {name:?}: {reason}")]
    InvalidOrganization { name: String, reason: String },

    /// A working set references a control that is not in the catalogue.
    #[error("Unknown control: {standard} {control_id}")]
    UnknownControl {
        standard: Standard,
        control_id: String,
    },

    /// A working set contains the same control more than once.
    #[error("Duplicate control in working set: {standard} {control_id}")]
    DuplicateControl {
        standard: Standard,
        control_id: String,
    },

    /// A working set does not cover every catalogue control.
    #[error("Working set is missing control: {standard} {control_id}")]
    MissingControl {
        standard: Standard,
        control_id: String,
    },

    /// Completion was requested while some drafts are still unanswered.
    #[error("{} control(s) have no compliance answer: {}", controls.len(), controls.join(", "))]
    Incomplete { controls: Vec<String> },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub(crate) fn invalid_value(field: &str, value: &str) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}
