// ABOUTME: Advert command implementation.
// ABOUTME: Shows each message fragment on the workers, then retracts it after the advert window or on interrupt.

use super::CommandContext;
use fleetctl::config::{ConfigBlob, split_message};
use fleetctl::error::Result;
use fleetctl::sequence::{BatchReport, InterruptGuard, advert_flow};

pub async fn advert(ctx: &CommandContext<'_>, message: &str) -> Result<BatchReport> {
    let template = ConfigBlob::load(&ctx.config.advert_template_path())?;

    let enabled = split_message(message)
        .iter()
        .map(|fragment| template.with_advert(fragment, true).to_pretty())
        .collect::<Result<Vec<_>>>()?;
    let disabled = template.with_advert("", false).to_pretty()?;

    ctx.output.progress(&format!(
        "  → Showing {} advert variant(s) on {} worker(s) for {:?}...",
        enabled.len(),
        ctx.targets.len(),
        ctx.config.advert_window
    ));

    let sequence = advert_flow(ctx.targets, &enabled, &disabled, ctx.config.advert_window);
    Ok(InterruptGuard::new(ctx.sequencer).run(sequence).await)
}
