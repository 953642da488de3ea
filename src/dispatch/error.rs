// ABOUTME: Dispatch error types.
// ABOUTME: Transport-level failures and method parsing errors for worker control requests.

use std::time::Duration;
use thiserror::Error;

/// Errors from a single HTTP exchange with a worker.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("HTTP handshake failed: {0}")]
    Handshake(String),

    #[error("failed to build request: {0}")]
    InvalidRequest(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("failed to read response: {0}")]
    Body(String),

    #[error("no response within {0:?}")]
    Timeout(Duration),
}

/// A verb outside GET/POST/PUT/DELETE.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported HTTP method: {0}")]
pub struct UnsupportedMethod(pub String);
