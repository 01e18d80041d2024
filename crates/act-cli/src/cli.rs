//! CLI argument definitions.

use clap::Parser;

use crate::commands::Commands;

/// ACT trading platform CLI.
#[derive(Parser, Debug)]
#[command(name = "act")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// API base URL
    #[arg(long, global = true, default_value = "http://localhost:8000/api")]
    pub api: String,

    #[command(subcommand)]
    pub command: Commands,
}
