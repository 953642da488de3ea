// ABOUTME: Login command implementation.
// ABOUTME: Sends one stored credential per worker, in file order and resolved target order.

use super::CommandContext;
use fleetctl::credentials::load_credentials;
use fleetctl::diagnostics::{Diagnostics, Warning};
use fleetctl::error::Result;
use fleetctl::sequence::{BatchReport, login_flow};

pub async fn login(ctx: &CommandContext<'_>, diag: &mut Diagnostics) -> Result<BatchReport> {
    let credentials = load_credentials(&ctx.config.credentials_file)?;

    for (target, credential) in ctx.targets.iter().zip(&credentials) {
        tracing::info!("Sending data for {} to port {}", credential.remark, target.port);
    }

    if credentials.len() > ctx.targets.len() {
        diag.warn(Warning::surplus_credentials(format!(
            "{} credential(s) in {} were not sent: only {} worker(s) selected",
            credentials.len() - ctx.targets.len(),
            ctx.config.credentials_file.display(),
            ctx.targets.len()
        )));
    }

    Ok(ctx.sequencer.run(login_flow(ctx.targets, &credentials)).await)
}
