#![warn(clippy::all, rust_2018_idioms)]

mod cli;

use clap::Parser;
use statrep::{logging, report};

fn main() -> statrep::error::Result<()> {
    logging::init();

    let config = cli::Cli::parse().into_config()?;
    tracing::debug!("Resolved configuration: {:?}", config);

    let output = report::run_report(&config)?;
    print!("{output}");
    Ok(())
}
