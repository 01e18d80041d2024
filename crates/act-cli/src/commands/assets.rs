//! Assets command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::session;

#[derive(Args, Debug)]
pub struct AssetsArgs {
    /// Show a single asset by id
    #[arg(long)]
    pub id: Option<String>,
}

pub async fn run(api: &str, args: AssetsArgs) -> Result<()> {
    let client = session::open_session(api)?;

    if let Some(id) = args.id {
        let asset = client.asset(&id).await.context("Failed to fetch asset")?;
        print_asset(&asset);
        return Ok(());
    }

    let assets = client.assets().await.context("Failed to fetch assets")?;
    if assets.is_empty() {
        println!("{}", "No assets.".dimmed());
        return Ok(());
    }

    for asset in &assets {
        print_asset(asset);
    }

    Ok(())
}

fn print_asset(asset: &act_core::models::Asset) {
    println!(
        "{:<8} {:>12.2}  volume {:>8}  amount {:>6}  portfolio {}",
        asset.symbol.bold(),
        asset.price,
        asset.volume,
        asset.amount,
        asset.portfolio_id.dimmed()
    );
}
