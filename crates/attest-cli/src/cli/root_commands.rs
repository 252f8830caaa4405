use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::values::{ComplianceArg, RiskArg, StandardArg};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List the controls of the built-in catalogue.
    Catalogue(CatalogueArgs),
    /// Start a working set, prefilled from today's logs.
    Draft(DraftArgs),
    /// Answer one control in a working-set file.
    Answer(AnswerArgs),
    /// Summarize a completed working set.
    Report(ReportArgs),
    /// Persist a completed working set as a new audit log.
    Save(SaveArgs),
    /// Load a persisted log, converting legacy column layouts.
    Migrate(MigrateArgs),
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
}

/// Arguments for `attest catalogue`.
#[derive(Clone, Debug, Args)]
pub struct CatalogueArgs {
    /// Only this standard.
    #[arg(long, short)]
    pub standard: Option<StandardArg>,
}

/// Arguments for `attest draft`.
#[derive(Clone, Debug, Args)]
pub struct DraftArgs {
    /// Organization under audit (overrides `session.organization`).
    #[arg(long)]
    pub org: Option<String>,
    /// Auditor display name (overrides `session.auditor`).
    #[arg(long)]
    pub auditor: Option<String>,
    /// Day whose logs to prefill from, as YYYYMMDD. Defaults to today.
    #[arg(long)]
    pub date: Option<String>,
    /// Write the working set here instead of printing it.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Arguments for `attest answer`.
#[derive(Clone, Debug, Args)]
pub struct AnswerArgs {
    /// Working-set file to edit in place.
    pub working_set: PathBuf,
    /// Control id, e.g. `A.5.1` or `5.1`.
    #[arg(long, short)]
    pub control: String,
    /// Disambiguate a control id present in several standards.
    #[arg(long, short)]
    pub standard: Option<StandardArg>,
    #[arg(long)]
    pub compliance: Option<ComplianceArg>,
    #[arg(long)]
    pub risk: Option<RiskArg>,
    /// Evidence or remarks.
    #[arg(long)]
    pub evidence: Option<String>,
    #[arg(long)]
    pub remediation: Option<String>,
}

/// Arguments for `attest report`.
#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    pub working_set: PathBuf,
}

/// Arguments for `attest save`.
#[derive(Clone, Debug, Args)]
pub struct SaveArgs {
    pub working_set: PathBuf,
    /// Also write the per-standard daily files `draft` prefills from.
    #[arg(long)]
    pub daily: bool,
}

/// Arguments for `attest migrate`.
#[derive(Clone, Debug, Args)]
pub struct MigrateArgs {
    pub file: PathBuf,
}

/// Arguments for `attest schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema to print. Lists every name when omitted.
    pub type_name: Option<String>,
}
