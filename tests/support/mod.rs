// ABOUTME: Test support utilities.
// ABOUTME: Provides a scripted transport double, mock worker helpers and tracing init.

use std::sync::Once;

// Each test binary only uses some of these modules, so allow dead_code.
#[allow(dead_code)]
pub mod scripted;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter =
            EnvFilter::from_default_env().add_directive("fleetctl=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// `count` targets on 127.0.0.1 starting at port 1.
#[allow(dead_code)]
pub fn targets(count: u16) -> Vec<fleetctl::fleet::Target> {
    (1..=count)
        .map(|port| fleetctl::fleet::Target::new("127.0.0.1", port))
        .collect()
}

/// The loopback port a mock worker listens on.
#[allow(dead_code)]
pub fn mock_port(server: &mockito::ServerGuard) -> u16 {
    server.socket_address().port()
}

/// Decode the JSON carried in a `set=...` form body.
#[allow(dead_code)]
pub fn decode_set_body(body: &str) -> serde_json::Value {
    let encoded = body.strip_prefix("set=").expect("body is a set form");
    let json = urlencoding::decode(encoded).expect("valid percent-encoding");
    serde_json::from_str(&json).expect("set carries JSON")
}
