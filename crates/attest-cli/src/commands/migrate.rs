use anyhow::Context;
use attest_core::responses::MigrateResponse;
use attest_store::load_log;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MigrateArgs;
use crate::output::output;

/// Handle `attest migrate`.
pub fn handle(args: &MigrateArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let prior = load_log(&args.file)
        .with_context(|| format!("failed to migrate {}", args.file.display()))?;

    output(
        &MigrateResponse {
            path: prior.path,
            schema_version: prior.version,
            rows: prior.records.len(),
            records: prior.records,
        },
        flags.format,
    )
}
