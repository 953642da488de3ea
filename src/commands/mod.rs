// ABOUTME: Command module aggregator for the fleetctl CLI.
// ABOUTME: Re-exports the config, advert, broadcast, login and connect command handlers.

mod advert;
mod broadcast;
mod config_push;
mod connect;
mod login;

pub use advert::advert;
pub use broadcast::{disconnect, quit};
pub use config_push::push_config;
pub use connect::connect;
pub use login::login;

use fleetctl::config::FleetConfig;
use fleetctl::fleet::Target;
use fleetctl::output::Output;
use fleetctl::sequence::Sequencer;

/// Everything a command needs, built once per invocation.
pub struct CommandContext<'a> {
    pub config: &'a FleetConfig,
    pub targets: &'a [Target],
    pub sequencer: &'a Sequencer,
    pub output: &'a Output,
}
