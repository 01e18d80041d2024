//! Funds command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::session;

#[derive(Args, Debug)]
pub struct FundsArgs {}

pub async fn run(api: &str, _args: FundsArgs) -> Result<()> {
    let client = session::open_session(api)?;

    let funds = client.funds().await.context("Failed to fetch funds")?;

    if funds.is_empty() {
        println!("{}", "No funds.".dimmed());
        return Ok(());
    }

    for fund in &funds {
        match fund.client_id.as_deref() {
            Some(client_id) => println!("{}  client {}", fund.name.bold(), client_id.dimmed()),
            None => println!("{}", fund.name.bold()),
        }
    }

    Ok(())
}
