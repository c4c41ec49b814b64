use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Kairos calendar-day ensemble post-processor.
#[derive(Parser)]
#[command(
    name = "kairos",
    version,
    about = "Calendar-day stratified ensemble post-processing and skill verification"
)]
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
    /// Calibrate, assemble and verify every configured model.
    Run(RunArgs),
    /// Load and validate the configuration and input record.
    Check(CheckArgs),
}

/// Arguments for the `run` subcommand.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "kairos.toml")]
    pub config: PathBuf,

    /// Override input record path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override output directory from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Run calendar pairs sequentially.
    #[arg(long)]
    pub sequential: bool,
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "kairos.toml")]
    pub config: PathBuf,

    /// Override input record path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}
