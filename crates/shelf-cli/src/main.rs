//! Shelf CLI - interactive front end for the ShelfDB catalog.
//!
//! Thin collaborator over the catalog core: menu loop, input parsing, and
//! display formatting. The core itself never performs I/O.

mod commands;
mod error;

use clap::Parser;
use shelf_catalog::Catalog;
use std::io::{self, BufReader};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use commands::{run_loop, seed_sample_data};
use error::Result;

/// Interactive library catalog.
#[derive(Debug, Parser)]
#[command(name = "shelf", version, about)]
struct Cli {
    /// Skip loading the sample records at startup.
    #[arg(long)]
    no_seed: bool,

    /// Enable verbose logging (repeat for trace level).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut catalog = Catalog::new();
    if !cli.no_seed {
        seed_sample_data(&mut catalog)?;
        println!("Sample data loaded.");
    }
    tracing::debug!(records = catalog.len(), "catalog initialized");

    let stdin = io::stdin();
    let mut input = BufReader::new(stdin.lock());
    let mut out = io::stdout().lock();
    run_loop(&mut catalog, &mut input, &mut out)
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
