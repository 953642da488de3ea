// ABOUTME: Concurrent fan-out of dispatch requests with per-request failure isolation.
// ABOUTME: One task per request; waits for every outcome unless cancelled, then honours a grace period.

use super::outcome::{DispatchOutcome, RecordedOutcome};
use super::request::{DispatchRequest, RequestId, RequestRef};
use super::sink::OutcomeSink;
use super::transport::Transport;
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Everything one batch produced.
#[derive(Debug, Default)]
pub struct BatchResult {
    /// One entry per request that was actually sent.
    pub outcomes: Vec<RecordedOutcome>,
    /// Requests never sent because cancellation arrived first.
    pub withheld: Vec<RequestRef>,
    /// Requests still in flight when the grace period ran out.
    pub abandoned: Vec<RequestRef>,
    /// Whether cancellation was observed during the batch.
    pub interrupted: bool,
}

impl BatchResult {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// The outcome recorded for `id`, if it was sent.
    pub fn outcome_for(&self, id: RequestId) -> Option<&RecordedOutcome> {
        self.outcomes.iter().find(|o| o.request.id == id)
    }
}

enum TaskResult {
    Sent(RecordedOutcome),
    Withheld(RequestRef),
}

/// Fans requests out over a transport, one task per request.
#[derive(Clone)]
pub struct Executor {
    transport: Arc<dyn Transport>,
    sink: Arc<dyn OutcomeSink>,
    max_parallel: Option<usize>,
    grace: Duration,
}

impl Executor {
    pub fn new(transport: Arc<dyn Transport>, sink: Arc<dyn OutcomeSink>) -> Self {
        Self {
            transport,
            sink,
            max_parallel: None,
            grace: Duration::from_secs(2),
        }
    }

    /// Cap the number of HTTP calls in flight at once.
    pub fn max_parallel(mut self, limit: Option<usize>) -> Self {
        self.max_parallel = limit.filter(|n| *n > 0);
        self
    }

    /// How long in-flight requests are awaited after cancellation.
    pub fn grace(mut self, grace: Duration) -> Self {
        self.grace = grace;
        self
    }

    /// Send every request and wait for all outcomes.
    pub async fn execute(&self, requests: Vec<DispatchRequest>) -> BatchResult {
        self.execute_until(requests, &CancellationToken::new()).await
    }

    /// Send every request until `cancel` fires.
    ///
    /// After cancellation no further request is sent. Requests already on the
    /// wire are awaited for at most the grace period, then abandoned.
    pub async fn execute_until(
        &self,
        requests: Vec<DispatchRequest>,
        cancel: &CancellationToken,
    ) -> BatchResult {
        let permits = self.max_parallel.map(|n| Arc::new(Semaphore::new(n)));
        let mut outstanding: HashMap<RequestId, RequestRef> = HashMap::new();
        let mut aborts = Vec::with_capacity(requests.len());
        let mut pending = FuturesUnordered::new();

        tracing::debug!("dispatching {} request(s)", requests.len());

        for request in requests {
            let reference = request.reference();
            outstanding.insert(reference.id, reference.clone());

            let handle = tokio::spawn(run_request(
                request,
                Arc::clone(&self.transport),
                Arc::clone(&self.sink),
                permits.clone(),
                cancel.clone(),
            ));
            aborts.push(handle.abort_handle());
            pending.push(async move { (reference, handle.await) });
        }

        let mut result = BatchResult::default();
        let mut deadline: Option<Instant> = None;

        while !pending.is_empty() {
            let next = match deadline {
                None => tokio::select! {
                    next = pending.next() => next,
                    _ = cancel.cancelled() => {
                        tracing::debug!("batch cancelled; waiting up to {:?} for in-flight requests", self.grace);
                        result.interrupted = true;
                        deadline = Some(Instant::now() + self.grace);
                        continue;
                    }
                },
                Some(at) => tokio::select! {
                    next = pending.next() => next,
                    _ = tokio::time::sleep_until(at) => break,
                },
            };

            let Some((reference, joined)) = next else {
                break;
            };
            outstanding.remove(&reference.id);

            match joined {
                Ok(TaskResult::Sent(outcome)) => result.outcomes.push(outcome),
                Ok(TaskResult::Withheld(reference)) => result.withheld.push(reference),
                Err(e) => {
                    let outcome = RecordedOutcome::new(
                        reference,
                        DispatchOutcome::TransportFailure {
                            error: format!("dispatch task failed: {e}"),
                        },
                    );
                    self.sink.record(&outcome);
                    result.outcomes.push(outcome);
                }
            }
        }

        for handle in aborts {
            handle.abort();
        }

        if !outstanding.is_empty() {
            tracing::warn!(
                "abandoned {} in-flight request(s) after grace period",
                outstanding.len()
            );
        }
        let mut abandoned: Vec<_> = outstanding.into_values().collect();
        abandoned.sort_by_key(|r| r.id);
        result.abandoned = abandoned;

        result
    }
}

async fn run_request(
    request: DispatchRequest,
    transport: Arc<dyn Transport>,
    sink: Arc<dyn OutcomeSink>,
    permits: Option<Arc<Semaphore>>,
    cancel: CancellationToken,
) -> TaskResult {
    if let Some(delay) = request.delay {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => return TaskResult::Withheld(request.reference()),
            _ = tokio::time::sleep(delay) => {}
        }
    }

    let _permit = match permits {
        Some(semaphore) => tokio::select! {
            biased;
            _ = cancel.cancelled() => return TaskResult::Withheld(request.reference()),
            permit = semaphore.acquire_owned() => permit.ok(),
        },
        None => None,
    };

    if cancel.is_cancelled() {
        return TaskResult::Withheld(request.reference());
    }

    let outcome = match transport.send(&request).await {
        Ok(response) => DispatchOutcome::from(response),
        Err(e) => DispatchOutcome::TransportFailure {
            error: e.to_string(),
        },
    };

    let recorded = RecordedOutcome::new(request.reference(), outcome);
    sink.record(&recorded);
    TaskResult::Sent(recorded)
}
