//! seatpick - random seat picker and attendance tracker for one classroom.
//!
//! The shell is a line-oriented command loop over the core engine: pick
//! seat/name pairings, edit the chart, swap seats, and export attendance.
//! On startup the bell schedule decides which period's chart to auto-load.

mod app;
mod grid;
mod shell;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use seatpick_core::Config;

use app::App;

#[derive(Parser, Debug)]
#[command(name = "seatpick", about = "Random seat picker and attendance tracker", version)]
struct Args {
    /// Seating chart to load at startup (defaults to the current period's
    /// chart when one exists)
    #[arg(long)]
    chart: Option<PathBuf>,

    /// Roster file (defaults to roster.csv in the data directory)
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Directory for chart, roster, and attendance files
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();
    info!("seatpick starting");

    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(dir) = args.data_dir {
        config.data_dir = Some(dir);
    }

    let mut app = App::new(config, args.chart, args.roster);
    for note in app.startup_load() {
        println!("{}", note);
    }

    shell::run(&mut app)?;

    info!("seatpick shutting down");
    Ok(())
}
