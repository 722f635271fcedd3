mod commands;
mod logging;
mod ops;
mod reports;

use clap::Parser;
use eyre::{Context, Result};

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.verbosity());

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .wrap_err("Failed to start async runtime")?
        .block_on(cli.run())
}
