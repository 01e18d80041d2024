//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(api: &str, _args: LogoutArgs) -> Result<()> {
    let client = session::open_session(api)?;

    client.logout().await.context("Failed to clear session")?;

    output::success("Logged out");
    Ok(())
}
