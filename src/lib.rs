// ABOUTME: Library root for fleetctl - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod credentials;
pub mod diagnostics;
pub mod dispatch;
pub mod error;
pub mod fleet;
pub mod output;
pub mod prompt;
pub mod rooms;
pub mod sequence;
pub mod signal;
