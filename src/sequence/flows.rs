// ABOUTME: Sequence builders for each operator command.
// ABOUTME: Connect, broadcast, login, config push with idle fallback, and advert toggling.

use super::phase::{Phase, Sequence};
use crate::credentials::Credential;
use crate::dispatch::{DispatchRequest, Endpoint};
use crate::fleet::Target;
use std::time::Duration;

pub const DISCONNECT_PHASE: &str = "disconnectRoom";
pub const CONNECT_PHASE: &str = "connectRoom";
pub const QUIT_PHASE: &str = "quit";
pub const LOGIN_PHASE: &str = "customCookie";
pub const CONFIG_PHASE: &str = "sendSet";
pub const IDLE_PHASE: &str = "sendSet (idle)";
pub const ADVERT_PHASE: &str = "sendSet (advert)";
pub const RETRACT_PHASE: &str = "sendSet (advert off)";

/// Pair values with targets round-robin.
///
/// Produces `max(values, targets)` pairs: a single value is broadcast to
/// every target, and surplus values wrap around to the first target again.
pub fn distribute<'a, T>(values: &'a [T], targets: &'a [Target]) -> Vec<(&'a Target, &'a T)> {
    if values.is_empty() || targets.is_empty() {
        return Vec::new();
    }
    let count = values.len().max(targets.len());
    (0..count)
        .map(|i| (&targets[i % targets.len()], &values[i % values.len()]))
        .collect()
}

/// The same bodiless request to every target.
pub fn broadcast(label: &str, targets: &[Target], endpoint: &Endpoint) -> Phase {
    let requests = targets
        .iter()
        .map(|target| DispatchRequest::new(target.clone(), endpoint))
        .collect();
    Phase::new(label, requests)
}

/// Push one or more config values with `POST /sendSet`.
pub fn config_phase(label: &str, targets: &[Target], values: &[String]) -> Phase {
    let requests = distribute(values, targets)
        .into_iter()
        .map(|(target, value)| {
            DispatchRequest::new(target.clone(), &Endpoint::SendSet).with_form("set", value)
        })
        .collect();
    Phase::new(label, requests)
}

/// Leave the current room everywhere, then join `room_id` everywhere.
pub fn connect_flow(targets: &[Target], room_id: u64) -> Sequence {
    Sequence::new()
        .then(broadcast(DISCONNECT_PHASE, targets, &Endpoint::DisconnectRoom))
        .then(broadcast(
            CONNECT_PHASE,
            targets,
            &Endpoint::ConnectRoom { room_id },
        ))
}

pub fn disconnect_flow(targets: &[Target]) -> Sequence {
    Sequence::new().then(broadcast(DISCONNECT_PHASE, targets, &Endpoint::DisconnectRoom))
}

pub fn quit_flow(targets: &[Target]) -> Sequence {
    Sequence::new().then(broadcast(QUIT_PHASE, targets, &Endpoint::Quit))
}

/// Credential `i` goes to target `i`; credentials beyond the targets are not sent.
pub fn login_flow(targets: &[Target], credentials: &[Credential]) -> Sequence {
    let requests = targets
        .iter()
        .zip(credentials)
        .map(|(target, credential)| {
            DispatchRequest::new(target.clone(), &Endpoint::CustomCookie)
                .with_form("cookie", &credential.cookie)
        })
        .collect();
    Sequence::new().then(Phase::new(LOGIN_PHASE, requests))
}

/// Push a config, optionally wait, then restore the idle config.
///
/// The idle push is also the fallback for an interrupted run, so targets are
/// never left on the pushed config.
pub fn config_flow(
    targets: &[Target],
    config: &str,
    wait: Option<Duration>,
    idle: &str,
) -> Sequence {
    let idle_values = [idle.to_string()];
    let mut sequence = Sequence::new()
        .then(config_phase(CONFIG_PHASE, targets, &[config.to_string()]))
        .with_fallback(config_phase(IDLE_PHASE, targets, &idle_values));

    if let Some(wait) = wait.filter(|w| !w.is_zero()) {
        sequence = sequence
            .wait(wait)
            .then(config_phase(IDLE_PHASE, targets, &idle_values));
    }

    sequence
}

/// Show each advert variant, then retract it on the same target after `window`.
///
/// If the run is interrupted before the window ends, the fallback retracts the
/// advert on every target that was given one.
pub fn advert_flow(
    targets: &[Target],
    enabled: &[String],
    disabled: &str,
    window: Duration,
) -> Sequence {
    let mut requests = Vec::new();
    let mut shown: Vec<Target> = Vec::new();
    for (target, variant) in distribute(enabled, targets) {
        if !shown.contains(target) {
            shown.push(target.clone());
        }
        requests.push(
            DispatchRequest::new(target.clone(), &Endpoint::SendSet).with_form("set", variant),
        );
        requests.push(
            DispatchRequest::new(target.clone(), &Endpoint::SendSet)
                .with_form("set", disabled)
                .with_delay(window),
        );
    }
    Sequence::new()
        .then(Phase::new(ADVERT_PHASE, requests))
        .with_fallback(config_phase(RETRACT_PHASE, &shown, &[disabled.to_string()]))
}
