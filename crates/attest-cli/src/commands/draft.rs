use anyhow::Context;
use attest_core::enums::Standard;
use attest_core::reconcile::WorkingSet;
use attest_core::responses::DraftResponse;
use attest_store::PriorLog;
use chrono::NaiveDate;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DraftArgs;
use crate::commands::shared::working_set;
use crate::context::AppContext;
use crate::output::output;

/// Handle `attest draft`.
pub fn handle(args: &DraftArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.org.is_none() && !ctx.config.session.is_configured() {
        tracing::warn!(
            organization = %ctx.config.session.organization,
            "no organization configured; set session.organization or pass --org"
        );
    }
    let session = ctx.session(args.org.as_deref(), args.auditor.as_deref())?;
    let now = ctx.now();
    let day = match &args.date {
        Some(raw) => parse_day(raw)?,
        None => now.date(),
    };

    let mut priors: Vec<(Standard, PriorLog)> = Vec::new();
    for standard in Standard::ALL {
        let prior = ctx
            .store
            .load_prior(session.organization(), standard, day)
            .with_context(|| format!("failed to load prior {standard} log"))?;
        if let Some(prior) = prior {
            priors.push((standard, prior));
        }
    }

    let set = WorkingSet::assemble(&session, now, |standard| {
        priors
            .iter()
            .find(|(logged, _)| *logged == standard)
            .map(|(_, prior)| prior.records.as_slice())
    });

    match &args.output {
        Some(path) => {
            working_set::write(path, &set)?;
            output(
                &DraftResponse {
                    path: path.clone(),
                    drafts: set.drafts.len(),
                    prefilled: set.answered(),
                    prior_logs: priors.into_iter().map(|(_, prior)| prior.path).collect(),
                },
                flags.format,
            )
        }
        None => output(&set, flags.format),
    }
}

fn parse_day(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y%m%d")
        .with_context(|| format!("invalid --date '{raw}': expected YYYYMMDD"))
}
