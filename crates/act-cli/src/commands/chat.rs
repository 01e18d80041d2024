//! Chat command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::session;

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Message for the AI assistant
    pub message: String,
}

pub async fn run(api: &str, args: ChatArgs) -> Result<()> {
    let client = session::open_session(api)?;

    eprintln!("{}", "Thinking...".dimmed());

    let reply = client
        .chat(&args.message)
        .await
        .context("Failed to chat")?;

    println!("{}", reply);
    Ok(())
}
