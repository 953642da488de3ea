// ABOUTME: Per-request dispatch outcomes.
// ABOUTME: Any HTTP response counts as success at this layer; only transport errors fail.

use super::request::RequestRef;
use tokio::time::Instant;

/// What the worker answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A response was received, whatever its status code.
    Success { status: u16, body: String },
    /// No response: connection, protocol or timeout failure.
    TransportFailure { error: String },
}

impl DispatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DispatchOutcome::Success { .. })
    }
}

impl From<Response> for DispatchOutcome {
    fn from(response: Response) -> Self {
        DispatchOutcome::Success {
            status: response.status,
            body: response.body,
        }
    }
}

/// An outcome tied to the request that produced it.
#[derive(Debug, Clone)]
pub struct RecordedOutcome {
    pub request: RequestRef,
    pub outcome: DispatchOutcome,
    pub completed_at: Instant,
}

impl RecordedOutcome {
    pub fn new(request: RequestRef, outcome: DispatchOutcome) -> Self {
        Self {
            request,
            outcome,
            completed_at: Instant::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}
