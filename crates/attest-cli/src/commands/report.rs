use anyhow::Context;
use attest_core::report::Report;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::root_commands::ReportArgs;
use crate::commands::shared::working_set;
use crate::context::AppContext;
use crate::output::{output, report::render_report, table_options};

/// Handle `attest report`.
pub fn handle(args: &ReportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let set = working_set::read(&args.working_set, &ctx.schemas)?;
    let records = set
        .complete()
        .context("cannot report on an incomplete working set")?;
    let report = Report::new(set.organization, ctx.now(), &records);

    if flags.format == OutputFormat::Table {
        println!("{}", render_report(&report, table_options()));
        Ok(())
    } else {
        output(&report, flags.format)
    }
}
