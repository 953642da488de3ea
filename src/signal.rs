// ABOUTME: Operator interrupt handling.
// ABOUTME: Turns Ctrl-C into a process-wide cancellation token.

use tokio_util::sync::CancellationToken;

/// Cancel `token` when the operator presses Ctrl-C.
pub fn watch_interrupt(token: CancellationToken) {
    tokio::spawn(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                match result {
                    Ok(()) => tracing::info!("received interrupt"),
                    Err(e) => {
                        tracing::warn!("failed to listen for Ctrl-C: {}", e);
                        return;
                    }
                }
                token.cancel();
            }
            _ = token.cancelled() => {}
        }
    });
}
