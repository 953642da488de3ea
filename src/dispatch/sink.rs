// ABOUTME: Observability sinks receiving each outcome as it is produced.
// ABOUTME: TracingSink logs progress; MemorySink keeps outcomes for inspection.

use super::outcome::{DispatchOutcome, RecordedOutcome};
use parking_lot::Mutex;

/// Receives every outcome the moment its request finishes.
///
/// Called concurrently from dispatch tasks.
pub trait OutcomeSink: Send + Sync {
    fn record(&self, outcome: &RecordedOutcome);
}

/// Logs one event per outcome.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl OutcomeSink for TracingSink {
    fn record(&self, recorded: &RecordedOutcome) {
        let url = &recorded.request.url;
        match &recorded.outcome {
            DispatchOutcome::Success { status, body } => {
                tracing::info!(%url, status, "response: {}", body.trim());
            }
            DispatchOutcome::TransportFailure { error } => {
                tracing::warn!(%url, "error connecting to {}: {}", url, error);
            }
        }
    }
}

/// Keeps every outcome in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    outcomes: Mutex<Vec<RecordedOutcome>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcomes(&self) -> Vec<RecordedOutcome> {
        self.outcomes.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.outcomes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.lock().is_empty()
    }
}

impl OutcomeSink for MemorySink {
    fn record(&self, outcome: &RecordedOutcome) {
        self.outcomes.lock().push(outcome.clone());
    }
}
