mod cli;
mod config;
mod data;
mod error;
mod logging;

use crate::cli::Cli;
use crate::error::Result;
use clap::Parser;
use latlay::workflows::force::force_layout_with_config;
use tracing::{debug, info};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, &cli.log_file)?;

    info!("latlay v{} starting up", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let config = config::load(&cli)?;
    let document = data::read_input(&cli.input)?;
    let (layout, names) = document.to_layout()?;

    let optimized = force_layout_with_config(&layout, &config)?;

    let output = data::from_layout(&optimized, &names);
    data::write_output(&output, cli.output.as_deref())?;

    info!("Optimized layout written");
    Ok(())
}
