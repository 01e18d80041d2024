//! Price alert command implementation.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand, ValueEnum};
use colored::Colorize;

use act_core::models::{AlertDirection, PriceAlert};
use act_core::store::AlertStore;
use act_core::types::Symbol;
use act_rest::{AlertMonitor, TriggeredAlert};

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct AlertsArgs {
    #[command(subcommand)]
    pub command: AlertsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AlertsSubcommand {
    /// Add a price alert
    Add(AddArgs),

    /// List stored alerts
    List,

    /// Remove an alert by its list position
    Remove(RemoveArgs),

    /// Evaluate all alerts once
    Check,

    /// Poll and report triggered alerts until interrupted
    Watch(WatchArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Ticker symbol to watch
    pub symbol: String,

    /// Price threshold
    #[arg(long)]
    pub threshold: f64,

    /// Fire when the price moves above or below the threshold
    #[arg(long, value_enum, default_value_t = Direction::Above)]
    pub direction: Direction,
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Position from 'act alerts list' (1-based)
    pub position: usize,
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Seconds between sweeps
    #[arg(long, default_value_t = 3600)]
    pub period: u64,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Direction {
    Above,
    Below,
}

impl From<Direction> for AlertDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Above => AlertDirection::Above,
            Direction::Below => AlertDirection::Below,
        }
    }
}

pub async fn run(api: &str, args: AlertsArgs) -> Result<()> {
    let store = session::open_store()?;

    match args.command {
        AlertsSubcommand::Add(add) => {
            let symbol = Symbol::new(&add.symbol).context("Invalid symbol")?;
            let mut alerts = store.alerts().await.context("Failed to read alerts")?;
            alerts.push(PriceAlert::new(symbol, add.threshold, add.direction.into()));
            store
                .put_alerts(&alerts)
                .await
                .context("Failed to save alerts")?;
            output::success("Alert added");
        }
        AlertsSubcommand::List => {
            let alerts = store.alerts().await.context("Failed to read alerts")?;
            if alerts.is_empty() {
                println!("{}", "No alerts.".dimmed());
                return Ok(());
            }
            for (i, alert) in alerts.iter().enumerate() {
                println!(
                    "{:>3}. {:<8} {} {:.2}",
                    i + 1,
                    alert.symbol.as_str().bold(),
                    alert.direction,
                    alert.threshold
                );
            }
        }
        AlertsSubcommand::Remove(remove) => {
            let mut alerts = store.alerts().await.context("Failed to read alerts")?;
            if remove.position == 0 || remove.position > alerts.len() {
                bail!("No alert at position {}", remove.position);
            }
            let removed = alerts.remove(remove.position - 1);
            store
                .put_alerts(&alerts)
                .await
                .context("Failed to save alerts")?;
            output::success(&format!(
                "Removed alert on {} {} {:.2}",
                removed.symbol, removed.direction, removed.threshold
            ));
        }
        AlertsSubcommand::Check => {
            let monitor = AlertMonitor::new(session::open_session(api)?, Arc::new(store));
            let triggered = monitor.check().await.context("Failed to check alerts")?;
            if triggered.is_empty() {
                println!("{}", "No alerts triggered.".dimmed());
                return Ok(());
            }
            for alert in &triggered {
                print_triggered(alert);
            }
        }
        AlertsSubcommand::Watch(watch) => {
            let monitor = AlertMonitor::new(session::open_session(api)?, Arc::new(store))
                .with_period(Duration::from_secs(watch.period));
            eprintln!(
                "{}",
                format!("Watching alerts every {}s...", watch.period).dimmed()
            );
            monitor.run(print_triggered).await;
        }
    }

    Ok(())
}

fn print_triggered(alert: &TriggeredAlert) {
    println!(
        "{} {:<8} at {:.2} ({} {:.2})",
        "!".red().bold(),
        alert.alert.symbol.as_str().bold(),
        alert.price,
        alert.alert.direction,
        alert.alert.threshold
    );
}
