//! Quote command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use act_core::types::Symbol;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Ticker symbol to quote
    pub symbol: String,
}

pub async fn run(api: &str, args: QuoteArgs) -> Result<()> {
    let symbol = Symbol::new(&args.symbol).context("Invalid symbol")?;
    let client = session::open_session(api)?;

    let quote = client
        .stock_quote(&symbol)
        .await
        .context("Failed to fetch quote")?;

    println!("{}", symbol.as_str().bold());
    output::field("Current", &format!("{:.2}", quote.current));
    if let Some(change) = quote.change {
        output::field("Change", &format!("{:+.2}", change));
    }
    if let (Some(high), Some(low)) = (quote.high, quote.low) {
        output::field("Range", &format!("{:.2} - {:.2}", low, high));
    }
    if let Some(previous_close) = quote.previous_close {
        output::field("Prev close", &format!("{:.2}", previous_close));
    }

    Ok(())
}
