// ABOUTME: Entry point for the fleetctl CLI application.
// ABOUTME: Parses arguments, resolves the fleet, and runs the config push and the chosen action.

mod cli;
mod commands;
mod interactive;

use clap::Parser;
use cli::{Action, Cli};
use commands::CommandContext;
use fleetctl::config::FleetConfig;
use fleetctl::diagnostics::{Diagnostics, Warning};
use fleetctl::dispatch::{Executor, HttpTransport, TracingSink};
use fleetctl::error::{Error, Result};
use fleetctl::fleet::select_or_all;
use fleetctl::output::{Output, OutputMode};
use fleetctl::sequence::Sequencer;
use fleetctl::signal::watch_interrupt;
use std::env;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

/// Exit status used when the operator interrupts a command without a fallback.
const EXIT_INTERRUPTED: i32 = 130;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise the verbose flag picks the level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.silent {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let mut output = Output::new(mode);
    output.start_timer();

    let mut diag = Diagnostics::default();
    let result = run(&cli, &output, &mut diag).await;

    for warning in diag.warnings() {
        output.warning(warning);
    }

    match result {
        Ok(Finished::Completed) => {}
        Ok(Finished::Interrupted) => std::process::exit(EXIT_INTERRUPTED),
        Err(e) => {
            output.error(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// How a run ended when it did not fail outright.
enum Finished {
    Completed,
    Interrupted,
}

async fn run(cli: &Cli, output: &Output, diag: &mut Diagnostics) -> Result<Finished> {
    let config = match &cli.settings {
        Some(path) => FleetConfig::load(path)?,
        None => FleetConfig::discover(&env::current_dir()?)?,
    };

    let targets = select_or_all(&cli.fleet, &config, diag);
    if targets.is_empty() {
        return Err(Error::NoTargets);
    }
    tracing::debug!("resolved {} target(s) from fleet input {:?}", targets.len(), cli.fleet);

    let cancel = CancellationToken::new();
    watch_interrupt(cancel.clone());

    let executor = Executor::new(
        Arc::new(HttpTransport::new(config.request_timeout)),
        Arc::new(TracingSink),
    )
    .max_parallel(config.max_parallel)
    .grace(config.interrupt_grace);
    let sequencer = Sequencer::new(executor, cancel.clone());

    let ctx = CommandContext {
        config: &config,
        targets: &targets,
        sequencer: &sequencer,
        output,
    };

    if let Some(arg) = &cli.config {
        match commands::push_config(&ctx, arg, cli.time).await {
            Ok(report) => {
                output.report("Config push", &report);
                // The idle fallback already ran; an interrupt here is a clean stop.
                if report.interrupted || !cli.has_follow_up() {
                    return Ok(Finished::Completed);
                }
            }
            // A bad config aborts only the config step; the action still runs.
            Err(
                e @ (Error::ConfigFileNotFound(_)
                | Error::NoConfigFiles(_)
                | Error::MalformedBlob { .. }),
            ) => {
                diag.warn(Warning::config_skipped(format!(
                    "{e}; skipping the config push"
                )));
            }
            Err(e) => return Err(e),
        }
    }

    if cancel.is_cancelled() {
        return Ok(Finished::Interrupted);
    }

    let (title, report) = match cli.action() {
        Action::Advert(message) => ("Advert", commands::advert(&ctx, &message).await?),
        Action::Quit => ("Quit", commands::quit(&ctx).await),
        Action::Disconnect => ("Disconnect", commands::disconnect(&ctx).await),
        Action::Login => ("Login", commands::login(&ctx, diag).await?),
        Action::Connect(room) => ("Connect", commands::connect(&ctx, room).await?),
    };
    output.report(title, &report);

    // A guarded command that ran its fallback stopped cleanly.
    if report.interrupted && report.fallback.is_none() {
        Ok(Finished::Interrupted)
    } else {
        Ok(Finished::Completed)
    }
}
