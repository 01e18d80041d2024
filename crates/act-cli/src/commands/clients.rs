//! Clients command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::session;

#[derive(Args, Debug)]
pub struct ClientsArgs {}

pub async fn run(api: &str, _args: ClientsArgs) -> Result<()> {
    let client = session::open_session(api)?;

    let clients = client.clients().await.context("Failed to fetch clients")?;

    if clients.is_empty() {
        println!("{}", "No clients.".dimmed());
        return Ok(());
    }

    for account in &clients {
        println!(
            "{}  manager {}",
            account.name.bold(),
            account.fund_manager_id
        );
    }

    Ok(())
}
