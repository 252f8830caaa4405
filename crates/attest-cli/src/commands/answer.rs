use attest_core::reconcile::Answer;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnswerArgs;
use crate::commands::shared::working_set;
use crate::context::AppContext;
use crate::output::output;

/// Handle `attest answer`.
pub fn handle(args: &AnswerArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut set = working_set::read(&args.working_set, &ctx.schemas)?;

    let answer = Answer {
        compliance: args.compliance.map(Into::into),
        risk_level: args.risk.map(Into::into),
        evidence: args.evidence.clone(),
        remediation_plan: args.remediation.clone(),
    };
    if answer == Answer::default() {
        anyhow::bail!(
            "nothing to answer: pass --compliance, --risk, --evidence or --remediation"
        );
    }

    let draft = set.draft_mut(args.standard.map(Into::into), &args.control)?;
    answer.apply_to(draft);
    let updated = draft.clone();
    tracing::info!(control = %updated.label(), "answered control");

    working_set::write(&args.working_set, &set)?;
    output(&updated, flags.format)
}
