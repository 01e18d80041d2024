//! Predict command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use act_core::types::Symbol;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Ticker symbol to forecast
    pub symbol: String,
}

pub async fn run(api: &str, args: PredictArgs) -> Result<()> {
    let symbol = Symbol::new(&args.symbol).context("Invalid symbol")?;
    let client = session::open_session(api)?;

    eprintln!("{}", "Requesting forecast...".dimmed());

    let forecast = client
        .predict(&symbol)
        .await
        .context("Failed to fetch forecast")?;

    output::json_pretty(&forecast)?;
    Ok(())
}
