// ABOUTME: Config push command implementation.
// ABOUTME: Pushes a blob, optionally restores the idle blob after a wait, and guards against interrupts.

use super::CommandContext;
use crate::interactive::choose_config;
use fleetctl::config::{ConfigBlob, resolve_config_path};
use fleetctl::error::Result;
use fleetctl::sequence::{BatchReport, InterruptGuard, config_flow};
use std::time::Duration;

/// Push the chosen config to every worker.
///
/// `arg` is a path or file name; an empty value means choose interactively.
/// The idle blob is loaded before anything is sent so the interrupt
/// fallback never depends on reading the disk mid-run.
pub async fn push_config(
    ctx: &CommandContext<'_>,
    arg: &str,
    wait_secs: Option<u64>,
) -> Result<BatchReport> {
    let path = if arg.is_empty() {
        choose_config(ctx.config.config_dir.clone()).await?
    } else {
        resolve_config_path(arg, &ctx.config.config_dir)?
    };

    ctx.output
        .progress(&format!("Loading configuration from: {}", path.display()));
    let config = ConfigBlob::load(&path)?.to_wire()?;
    let idle = ConfigBlob::load(&ctx.config.idle_config_path())?.to_wire()?;

    let wait = wait_secs.filter(|s| *s > 0).map(Duration::from_secs);
    if let Some(wait) = wait {
        ctx.output.progress(&format!(
            "  → Idle configuration will be restored after {:?}",
            wait
        ));
    }

    let sequence = config_flow(ctx.targets, &config, wait, &idle);
    Ok(InterruptGuard::new(ctx.sequencer).run(sequence).await)
}
