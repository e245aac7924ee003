use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Evenly paced reading-plan generator.
#[derive(Parser)]
#[command(name = "readplan", version, about = "Evenly paced reading-plan generator")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Build a plan and write it out.
    Generate(GenerateArgs),
    /// Report chapter and verse totals for the configured books.
    Stats(StatsArgs),
}

/// Where book metadata comes from.
#[derive(clap::Args)]
pub struct SourceArgs {
    /// Path of the JSON plan config.
    #[arg(default_value = "config.json")]
    pub config: PathBuf,

    /// Refetch book metadata even if it is cached.
    #[arg(long)]
    pub force: bool,

    /// Directory for cached per-book metadata.
    #[arg(long = "cache-dir", default_value = "cache")]
    pub cache_dir: PathBuf,
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// CSV output path.
    #[arg(short, long, default_value = "reading_plan.csv")]
    pub output: PathBuf,

    /// Print the JSON summary (with the plan embedded) instead of writing CSV.
    #[arg(long)]
    pub json: bool,

    /// Also write the plan to this SQLite database.
    #[cfg(feature = "sqlite")]
    #[arg(long)]
    pub sqlite: Option<PathBuf>,
}

/// Arguments for the `stats` subcommand.
#[derive(clap::Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}
