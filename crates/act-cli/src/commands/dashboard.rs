//! Dashboard command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Fund manager username (defaults to the logged-in user)
    pub username: Option<String>,
}

pub async fn run(api: &str, args: DashboardArgs) -> Result<()> {
    let client = session::open_session(api)?;

    let username = match args.username {
        Some(username) => username,
        None => {
            client
                .user()
                .await
                .context("Failed to fetch user details")?
                .username
        }
    };

    let summary = client
        .dashboard(&username)
        .await
        .context("Failed to fetch dashboard")?;

    println!("{}", username.bold());
    output::field("Clients", &summary.total_clients.to_string());
    output::field("Alerts", &summary.number_of_alerts.to_string());
    if !summary.recent_activities.is_empty() {
        println!("{}", "Recent activity:".dimmed());
        for activity in &summary.recent_activities {
            println!("  - {}", activity);
        }
    }

    Ok(())
}
