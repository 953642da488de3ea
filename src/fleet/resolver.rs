// ABOUTME: Pure port resolution from a fleet selection and the fleet settings.
// ABOUTME: Fleet n covers [start + (n-1)*size, start + n*size - 1], clipped to end_port.

use super::selection::{FleetSelection, InvalidSelection};
use super::target::Target;
use crate::config::FleetConfig;
use crate::diagnostics::{Diagnostics, Warning};
use std::collections::HashSet;

/// Resolve a selection to ordered, deduplicated targets.
///
/// `All` expands to whole fleets only. An explicit fleet number may address
/// the trailing partial fleet; its ports are clipped to `end_port`.
pub fn resolve(
    selection: &FleetSelection,
    config: &FleetConfig,
) -> Result<Vec<Target>, InvalidSelection> {
    let fleet_numbers: Vec<u32> = match selection {
        FleetSelection::All => (1..=config.total_fleets()).collect(),
        FleetSelection::Fleets(numbers) => numbers.iter().copied().collect(),
    };

    let start = u32::from(config.start_port);
    let end = u32::from(config.end_port);
    let size = u32::from(config.fleet_size);

    let mut seen = HashSet::new();
    let mut targets = Vec::new();

    for fleet in fleet_numbers {
        if fleet == 0 {
            return Err(InvalidSelection::new(
                selection.to_string(),
                "fleet numbers start at 1",
            ));
        }

        let first = u64::from(start) + u64::from(fleet - 1) * u64::from(size);
        if first > u64::from(end) {
            return Err(InvalidSelection::new(
                selection.to_string(),
                format!("fleet {fleet} lies beyond port {end}"),
            ));
        }
        let last = (first + u64::from(size) - 1).min(u64::from(end));

        for port in first..=last {
            // Bounded by end_port, which is a u16.
            let port = port as u16;
            if seen.insert(port) {
                targets.push(Target::new(config.ip_address.clone(), port));
            }
        }
    }

    Ok(targets)
}

/// Parse `input` into a selection, falling back to every fleet on bad input.
///
/// The fallback is recorded as a warning rather than failing the command.
pub fn select_or_all(input: &str, config: &FleetConfig, diag: &mut Diagnostics) -> Vec<Target> {
    let selection = match input.parse::<FleetSelection>() {
        Ok(selection) => selection,
        Err(e) => {
            diag.warn(Warning::selection_fallback(format!(
                "{e}; using all fleets instead"
            )));
            FleetSelection::All
        }
    };

    if selection == FleetSelection::All {
        return resolve_all(config, diag);
    }

    match resolve(&selection, config) {
        Ok(targets) => targets,
        Err(e) => {
            diag.warn(Warning::selection_fallback(format!(
                "{e}; using all fleets instead"
            )));
            resolve_all(config, diag)
        }
    }
}

fn resolve_all(config: &FleetConfig, diag: &mut Diagnostics) -> Vec<Target> {
    if config.has_partial_fleet() {
        diag.warn(Warning::partial_fleet(format!(
            "port range {}-{} leaves a partial fleet; it is excluded from all-fleet selection",
            config.start_port, config.end_port
        )));
    }
    resolve(&FleetSelection::All, config).unwrap_or_default()
}
