// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rb - replay recorded battles through the bot event registry

mod commands;
mod error;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{events, replay};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rb",
    version,
    about = "Robobus - replay battle traces through pluggable bot plugins"
)]
struct Cli {
    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON-lines trace of host callbacks
    Replay(replay::ReplayArgs),
    /// List the event names the bot raises
    Events(events::EventsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = logging::setup_logging(cli.log_file.as_deref())?;

    match cli.command {
        Commands::Replay(args) => replay::handle(args),
        Commands::Events(args) => events::handle(args),
    }
}
