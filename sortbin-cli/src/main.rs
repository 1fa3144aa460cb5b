//! Command line entry point: detect one waste item and print the recommended bin.

mod cli;
mod output;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use sortbin_core::{Detector, SortingService};
use sortbin_sensor_sim::{FixedSensor, SimulatedSensor};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_err| EnvFilter::new(cli.default_log_filter())),
        )
        .with_writer(io::stderr)
        .init();
    debug!(?cli, "parsed arguments");

    let service = SortingService::standard();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Command::Rules) => output::write_rules(&mut out, service.rules())?,
        Some(Command::Bins) => output::write_bins(&mut out)?,
        None => {
            let mut detector = detector_for(&cli);
            let result = service
                .run(detector.as_mut())
                .context("could not classify waste")?;

            if cli.json {
                output::write_json(&mut out, &result, cli.guidance)?;
            } else {
                output::write_report(&mut out, &result, cli.guidance)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn detector_for(cli: &Cli) -> Box<dyn Detector> {
    match (&cli.label, cli.seed) {
        (Some(label), _) => Box::new(FixedSensor::new(label.as_str())),
        (None, Some(seed)) => Box::new(SimulatedSensor::seeded(seed)),
        (None, None) => Box::new(SimulatedSensor::new()),
    }
}
