// ABOUTME: Aggregated results of an executed sequence.
// ABOUTME: Per-phase counts and failure detail, serialisable for JSON output.

use crate::dispatch::{BatchResult, DispatchOutcome};
use crate::fleet::Target;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureDetail {
    pub target: Target,
    pub url: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PhaseReport {
    pub label: String,
    pub submitted: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub withheld: usize,
    pub abandoned: usize,
    pub failures: Vec<FailureDetail>,
}

impl PhaseReport {
    pub fn from_result(label: &str, result: &BatchResult) -> Self {
        let failures = result
            .outcomes
            .iter()
            .filter_map(|recorded| match &recorded.outcome {
                DispatchOutcome::TransportFailure { error } => Some(FailureDetail {
                    target: recorded.request.target.clone(),
                    url: recorded.request.url.clone(),
                    error: error.clone(),
                }),
                DispatchOutcome::Success { .. } => None,
            })
            .collect();

        Self {
            label: label.to_string(),
            submitted: result.outcomes.len(),
            succeeded: result.succeeded(),
            failed: result.failed(),
            withheld: result.withheld.len(),
            abandoned: result.abandoned.len(),
            failures,
        }
    }
}

/// Everything one operator command did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub phases: Vec<PhaseReport>,
    pub interrupted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<PhaseReport>,
}

impl BatchReport {
    fn all_phases(&self) -> impl Iterator<Item = &PhaseReport> {
        self.phases.iter().chain(self.fallback.iter())
    }

    pub fn total_submitted(&self) -> usize {
        self.all_phases().map(|p| p.submitted).sum()
    }

    pub fn total_succeeded(&self) -> usize {
        self.all_phases().map(|p| p.succeeded).sum()
    }

    pub fn total_failed(&self) -> usize {
        self.all_phases().map(|p| p.failed).sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = &FailureDetail> {
        self.all_phases().flat_map(|p| p.failures.iter())
    }

    pub fn phase(&self, label: &str) -> Option<&PhaseReport> {
        self.phases.iter().find(|p| p.label == label)
    }
}
