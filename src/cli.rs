// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Flags select one action; config runs first, then message, quiet, disconnect, login, connect.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fleetctl")]
#[command(about = "Control a fleet of live-stream workers over their HTTP control ports")]
#[command(version)]
pub struct Cli {
    /// Fleet numbers to use, e.g. "1,2,3" ("0" for all fleets)
    #[arg(short, long, default_value = "0")]
    pub fleet: String,

    /// Push a configuration file (omit the value to choose interactively)
    #[arg(short, long, num_args = 0..=1, default_missing_value = "")]
    pub config: Option<String>,

    /// Seconds to wait before restoring the idle configuration
    #[arg(short, long)]
    pub time: Option<u64>,

    /// Show an advert message ("+" separates multiple messages)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Connect directly to this room ID instead of prompting
    #[arg(short, long)]
    pub room: Option<u64>,

    /// Send /quit to every worker
    #[arg(short, long)]
    pub quiet: bool,

    /// Only send disconnect requests
    #[arg(short, long)]
    pub disconnect: bool,

    /// Send stored credentials to the workers
    #[arg(short, long)]
    pub login: bool,

    /// Fleet settings file (default: fleetctl.yml in the current directory)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit JSON lines instead of human output
    #[arg(long, conflicts_with = "silent")]
    pub json: bool,

    /// Only print the final result
    #[arg(short, long)]
    pub silent: bool,
}

/// What to do after the optional config push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Advert(String),
    Quit,
    Disconnect,
    Login,
    Connect(Option<u64>),
}

impl Cli {
    pub fn action(&self) -> Action {
        if let Some(message) = &self.message {
            Action::Advert(message.clone())
        } else if self.quiet {
            Action::Quit
        } else if self.disconnect {
            Action::Disconnect
        } else if self.login {
            Action::Login
        } else {
            Action::Connect(self.room)
        }
    }

    /// Whether anything beyond the config push was requested.
    pub fn has_follow_up(&self) -> bool {
        self.room.is_some() || self.message.is_some() || self.quiet || self.disconnect || self.login
    }
}
