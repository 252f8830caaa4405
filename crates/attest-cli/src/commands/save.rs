use anyhow::Context;
use attest_core::entities::AuditLog;
use attest_core::enums::Standard;
use attest_core::responses::SaveResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SaveArgs;
use crate::commands::shared::working_set;
use crate::context::AppContext;
use crate::output::output;

/// Handle `attest save`.
pub fn handle(args: &SaveArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let set = working_set::read(&args.working_set, &ctx.schemas)?;
    let records = set
        .complete()
        .context("cannot save an incomplete working set")?;
    let log = AuditLog::new(set.organization, set.created_at, records);

    let snapshot = ctx
        .store
        .persist(&log)
        .context("failed to save audit log")?;

    let mut daily = Vec::new();
    if args.daily {
        for standard in Standard::ALL {
            let persisted = ctx
                .store
                .persist_daily(&log, standard)
                .with_context(|| format!("failed to save daily {standard} log"))?;
            daily.push(persisted);
        }
    }

    output(&SaveResponse { snapshot, daily }, flags.format)
}
