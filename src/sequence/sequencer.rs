// ABOUTME: Runs a sequence phase by phase over the dispatch executor.
// ABOUTME: Observes cancellation between phases, inside phases, and during waits.

use super::phase::{Sequence, Step};
use super::report::{BatchReport, PhaseReport};
use crate::dispatch::Executor;
use tokio_util::sync::CancellationToken;

pub struct Sequencer {
    executor: Executor,
    cancel: CancellationToken,
}

impl Sequencer {
    pub fn new(executor: Executor, cancel: CancellationToken) -> Self {
        Self { executor, cancel }
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Execute every step in order.
    ///
    /// A phase starts only after the previous phase has produced all of its
    /// outcomes. Failed requests are recorded and never stop the plan. The
    /// fallback phase is not run here; see `InterruptGuard`.
    pub async fn run(&self, sequence: Sequence) -> BatchReport {
        let (steps, _) = sequence.into_parts();
        let mut report = BatchReport::default();

        for step in steps {
            if self.cancel.is_cancelled() {
                report.interrupted = true;
                break;
            }

            match step {
                Step::Dispatch(phase) => {
                    tracing::debug!(
                        "phase {}: submitting {} request(s)",
                        phase.label,
                        phase.len()
                    );
                    let result = self
                        .executor
                        .execute_until(phase.requests, &self.cancel)
                        .await;
                    let phase_report = PhaseReport::from_result(&phase.label, &result);
                    tracing::info!(
                        "All {} requests have been processed ({} ok, {} failed)",
                        phase.label,
                        phase_report.succeeded,
                        phase_report.failed
                    );
                    report.phases.push(phase_report);

                    if result.interrupted {
                        report.interrupted = true;
                        break;
                    }
                }
                Step::Wait(duration) => {
                    tracing::info!("Waiting for {:?} before the next phase...", duration);
                    tokio::select! {
                        _ = tokio::time::sleep(duration) => {}
                        _ = self.cancel.cancelled() => {
                            report.interrupted = true;
                            break;
                        }
                    }
                }
            }
        }

        report
    }
}
