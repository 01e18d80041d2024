//! Refresh token command implementation.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct RefreshTokenArgs {}

pub async fn run(api: &str, _args: RefreshTokenArgs) -> Result<()> {
    let client = session::open_session(api)?;

    eprintln!("{}", "Refreshing session...".dimmed());

    let Some(token) = client.refresh().await else {
        bail!("Failed to refresh session. Run 'act login' to start a new one.");
    };

    output::success("Session refreshed successfully");
    if let Some(expires_at) = token.claims().ok().and_then(|c| c.expires_at()) {
        output::field("Token expires", &expires_at.to_rfc3339());
    }

    Ok(())
}
