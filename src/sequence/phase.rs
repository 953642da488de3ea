// ABOUTME: Phases and sequences of dispatch work.
// ABOUTME: A phase's requests all finish before the next step starts; waits sit between phases.

use crate::dispatch::DispatchRequest;
use std::time::Duration;

/// Requests submitted together; no ordering among them.
#[derive(Debug, Clone)]
pub struct Phase {
    pub label: String,
    pub requests: Vec<DispatchRequest>,
}

impl Phase {
    pub fn new(label: impl Into<String>, requests: Vec<DispatchRequest>) -> Self {
        Self {
            label: label.into(),
            requests,
        }
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

#[derive(Debug, Clone)]
pub enum Step {
    Dispatch(Phase),
    /// Phase-boundary pause; cancellation ends it early.
    Wait(Duration),
}

/// Ordered steps for one operator command, plus an optional fallback phase
/// that only runs when the command is interrupted.
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    steps: Vec<Step>,
    fallback: Option<Phase>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, phase: Phase) -> Self {
        self.steps.push(Step::Dispatch(phase));
        self
    }

    pub fn wait(mut self, duration: Duration) -> Self {
        self.steps.push(Step::Wait(duration));
        self
    }

    pub fn with_fallback(mut self, phase: Phase) -> Self {
        self.fallback = Some(phase);
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn phases(&self) -> impl Iterator<Item = &Phase> {
        self.steps.iter().filter_map(|step| match step {
            Step::Dispatch(phase) => Some(phase),
            Step::Wait(_) => None,
        })
    }

    pub fn fallback(&self) -> Option<&Phase> {
        self.fallback.as_ref()
    }

    pub fn take_fallback(&mut self) -> Option<Phase> {
        self.fallback.take()
    }

    pub fn into_parts(self) -> (Vec<Step>, Option<Phase>) {
        (self.steps, self.fallback)
    }
}
