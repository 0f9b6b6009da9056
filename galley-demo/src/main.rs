//! Galley demo driver
//!
//! Loads a scenario, runs one narrated round in the kitchen and on patrol,
//! then prints every fleet and its ships.

mod config;
mod delay;
mod narrator;
mod session;

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use galley_core::traits::Vessel;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::delay::{InstantDelay, StdDelay};
use crate::narrator::LogNarrator;
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(author, version, about = "Narrated kitchen and fleet demo")]
struct Args {
    /// Scenario file (defaults to the embedded galley.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for sonar and radar sweeps
    #[arg(long)]
    seed: Option<u64>,

    /// Wait one real second per processing tick
    #[arg(long)]
    real_time: bool,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let scenario = config::load(args.config.as_deref())?;
    let mut narrator = LogNarrator::new();
    let mut session = Session::from_config(&scenario, &mut narrator)
        .map_err(anyhow::Error::msg)
        .context("failed to build scenario")?;

    let seed = args.seed.unwrap_or_else(clock_seed);
    log::debug!("Sensor seed {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let report = if args.real_time {
        session.run(&mut StdDelay, &mut rng, &mut narrator)
    } else {
        let mut delay = InstantDelay::new();
        let report = session.run(&mut delay, &mut rng, &mut narrator);
        log::debug!("Skipped {:?} of processing time", delay.skipped());
        report
    };
    log::info!(
        "Round over: {} brewed, {} batches, {} contacts, {} volleys, {} refused",
        report.brewed,
        report.batches,
        report.contacts,
        report.volleys,
        report.refused
    );
    if narrator.diagnostics() > 0 {
        log::warn!(
            "{} of {} narrated events were refusals",
            narrator.diagnostics(),
            narrator.events()
        );
    }

    for appliance in session.kitchen() {
        log::debug!("{}", appliance);
    }

    for fleet in session.fleets() {
        println!("{}", fleet);
        for ship in fleet {
            println!("{}", ship.info());
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
