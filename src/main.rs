//! alos-mosaic CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the pipeline for one year,
//! and exit with a non-zero status on failure.
//! For programmatic use, prefer the library API (`alos_mosaic::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
