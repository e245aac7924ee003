//! readplan — turn a list of books and a day count into a reading plan.
//!
//! ```text
//! readplan generate config.json              writes reading_plan.csv
//! readplan generate config.json --json       prints the JSON summary
//! readplan stats config.json                 totals only
//! ```

mod cli;
mod config;
mod generate;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::run(args),
        Command::Stats(args) => generate::stats(args),
    }
}
