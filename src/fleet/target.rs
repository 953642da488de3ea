// ABOUTME: A single worker control endpoint.
// ABOUTME: One (ip, port) pair per live-stream client process.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Target {
    pub ip: String,
    pub port: u16,
}

impl Target {
    pub fn new(ip: impl Into<String>, port: u16) -> Self {
        Self {
            ip: ip.into(),
            port,
        }
    }

    /// `host:port`, used for the Host header and log lines.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }

    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.authority(), path_and_query)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ip, self.port)
    }
}
