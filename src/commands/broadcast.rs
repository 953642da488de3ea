// ABOUTME: Broadcast commands with no payload.
// ABOUTME: Sends /quit or /disconnectRoom to every resolved worker.

use super::CommandContext;
use fleetctl::sequence::{BatchReport, disconnect_flow, quit_flow};

/// Terminate every worker process.
pub async fn quit(ctx: &CommandContext<'_>) -> BatchReport {
    ctx.output.progress(&format!(
        "  → Sending quit to {} worker(s)...",
        ctx.targets.len()
    ));
    ctx.sequencer.run(quit_flow(ctx.targets)).await
}

/// Leave the current room on every worker.
pub async fn disconnect(ctx: &CommandContext<'_>) -> BatchReport {
    ctx.output.progress(&format!(
        "  → Disconnecting {} worker(s)...",
        ctx.targets.len()
    ));
    ctx.sequencer.run(disconnect_flow(ctx.targets)).await
}
