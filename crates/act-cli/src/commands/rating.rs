//! Trade rating command implementation.

use anyhow::{Context, Result};
use clap::Args;

use act_core::types::Symbol;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct RatingArgs {
    /// Ticker symbol to rate
    pub symbol: String,
}

pub async fn run(api: &str, args: RatingArgs) -> Result<()> {
    let symbol = Symbol::new(&args.symbol).context("Invalid symbol")?;
    let client = session::open_session(api)?;

    let rating = client
        .trade_rating(&symbol)
        .await
        .context("Failed to fetch trade rating")?;

    output::field(symbol.as_str(), &format!("{:.1} / 5", rating));
    Ok(())
}
