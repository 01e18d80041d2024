//! Register command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Username for the new account
    #[arg(long)]
    pub username: String,

    /// Email for the new account
    #[arg(long)]
    pub email: String,

    /// Password for the new account
    #[arg(long)]
    pub password: String,

    /// Platform role (fund_admin, fund_manager)
    #[arg(long, default_value = "fund_admin")]
    pub role: String,
}

pub async fn run(api: &str, args: RegisterArgs) -> Result<()> {
    let client = session::open_session(api)?;

    eprintln!("{}", "Registering...".dimmed());

    let response = client
        .register(&args.username, &args.email, &args.password, &args.role)
        .await
        .context("Failed to register")?;

    output::success("Registered successfully");
    output::json_pretty(&response)?;

    Ok(())
}
