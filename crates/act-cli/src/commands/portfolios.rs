//! Portfolios command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::session;

#[derive(Args, Debug)]
pub struct PortfoliosArgs {}

pub async fn run(api: &str, _args: PortfoliosArgs) -> Result<()> {
    let client = session::open_session(api)?;

    let portfolios = client
        .portfolios()
        .await
        .context("Failed to fetch portfolios")?;

    if portfolios.is_empty() {
        println!("{}", "No portfolios.".dimmed());
        return Ok(());
    }

    for portfolio in &portfolios {
        println!(
            "{}  fund {}",
            portfolio.name.bold(),
            portfolio.fund_id.dimmed()
        );
    }

    Ok(())
}
