//! CLI response types returned as JSON by `attest` commands.

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Control, LoggedRecord};
use crate::enums::{SchemaVersion, Standard};

/// One catalogue control, as listed by `attest catalogue`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CatalogueEntry {
    pub standard: Standard,
    pub id: String,
    pub name: String,
    pub description: String,
}

impl CatalogueEntry {
    #[must_use]
    pub fn new(standard: Standard, control: &Control) -> Self {
        Self {
            standard,
            id: control.id.to_string(),
            name: control.name.to_string(),
            description: control.description.to_string(),
        }
    }
}

/// Where a log landed, and the file it displaced if any.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PersistedLog {
    pub path: PathBuf,
    pub backup: Option<PathBuf>,
    pub rows: usize,
}

/// Response from `attest save`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SaveResponse {
    pub snapshot: PersistedLog,
    pub daily: Vec<PersistedLog>,
}

/// Response from `attest draft --output`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DraftResponse {
    pub path: PathBuf,
    pub drafts: usize,
    pub prefilled: usize,
    pub prior_logs: Vec<PathBuf>,
}

/// Response from `attest migrate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MigrateResponse {
    pub path: PathBuf,
    pub schema_version: SchemaVersion,
    pub rows: usize,
    pub records: Vec<LoggedRecord>,
}
