//! Purchase command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct PurchaseArgs {
    /// Stock symbols to trade (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub stocks: Vec<String>,

    /// Crypto symbols to trade (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub cryptos: Vec<String>,
}

pub async fn run(api: &str, args: PurchaseArgs) -> Result<()> {
    if args.stocks.is_empty() && args.cryptos.is_empty() {
        bail!("Provide --stocks and/or --cryptos");
    }

    let client = session::open_session(api)?;

    eprintln!("{}", "Submitting purchase...".dimmed());

    let receipt = client
        .purchase(&args.stocks, &args.cryptos)
        .await
        .context("Failed to complete purchase")?;

    output::success("Purchase completed");
    output::json_pretty(&receipt)?;

    Ok(())
}
