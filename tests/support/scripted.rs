// ABOUTME: In-process Transport double with scripted latency and failures.
// ABOUTME: Records every call with its start time and tracks peak concurrency.

use async_trait::async_trait;
use fleetctl::dispatch::{DispatchRequest, Response, Transport, TransportError};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::Instant;

/// One call observed by the scripted transport.
#[derive(Debug, Clone)]
pub struct SentRequest {
    pub port: u16,
    pub path: String,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
    pub started_at: Instant,
}

#[derive(Default)]
pub struct ScriptedTransport {
    default_latency: Duration,
    latency: HashMap<u16, Duration>,
    failing: HashSet<u16>,
    calls: Mutex<Vec<SentRequest>>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latency applied to every port without its own entry.
    pub fn latency(mut self, latency: Duration) -> Self {
        self.default_latency = latency;
        self
    }

    pub fn port_latency(mut self, port: u16, latency: Duration) -> Self {
        self.latency.insert(port, latency);
        self
    }

    /// Calls to `port` fail with a connection error after their latency.
    pub fn failing(mut self, port: u16) -> Self {
        self.failing.insert(port);
        self
    }

    pub fn calls(&self) -> Vec<SentRequest> {
        self.calls.lock().clone()
    }

    pub fn calls_to(&self, path: &str) -> Vec<SentRequest> {
        self.calls().into_iter().filter(|c| c.path == path).collect()
    }

    /// Highest number of calls that were in flight at the same time.
    pub fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &DispatchRequest) -> Result<Response, TransportError> {
        let port = request.target.port;
        self.calls.lock().push(SentRequest {
            port,
            path: request.path.clone(),
            body: request.body.clone(),
            headers: request.headers.clone(),
            started_at: Instant::now(),
        });

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        let latency = self
            .latency
            .get(&port)
            .copied()
            .unwrap_or(self.default_latency);
        tokio::time::sleep(latency).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing.contains(&port) {
            Err(TransportError::Connect(format!(
                "connection refused on port {port}"
            )))
        } else {
            Ok(Response {
                status: 200,
                body: "ok".to_string(),
            })
        }
    }
}
