// ABOUTME: Interrupt guard for sequences that must not leave workers in a live state.
// ABOUTME: On cancellation, broadcasts the fallback phase directly through the executor.

use super::phase::Sequence;
use super::report::{BatchReport, PhaseReport};
use super::sequencer::Sequencer;

pub struct InterruptGuard<'a> {
    sequencer: &'a Sequencer,
}

impl<'a> InterruptGuard<'a> {
    pub fn new(sequencer: &'a Sequencer) -> Self {
        Self { sequencer }
    }

    /// Run `sequence`; if it is interrupted, run its fallback phase to completion.
    ///
    /// The fallback is not itself cancellable and runs even when earlier
    /// phases had failures.
    pub async fn run(&self, mut sequence: Sequence) -> BatchReport {
        let fallback = sequence.take_fallback();
        let mut report = self.sequencer.run(sequence).await;

        if report.interrupted
            && let Some(fallback) = fallback
        {
            tracing::warn!(
                "Interrupt received, pushing {} to {} target(s)...",
                fallback.label,
                fallback.len()
            );
            let label = fallback.label.clone();
            let result = self.sequencer.executor().execute(fallback.requests).await;
            let fallback_report = PhaseReport::from_result(&label, &result);
            tracing::info!(
                "Fallback {} finished ({} ok, {} failed)",
                label,
                fallback_report.succeeded,
                fallback_report.failed
            );
            report.fallback = Some(fallback_report);
        }

        report
    }
}
