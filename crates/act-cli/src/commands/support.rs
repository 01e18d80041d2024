//! Support request command implementation.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct SupportArgs {
    #[command(subcommand)]
    pub command: SupportSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SupportSubcommand {
    /// List support requests
    List,

    /// File a new support request
    Create(CreateArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// The request text
    pub message: String,
}

pub async fn run(api: &str, args: SupportArgs) -> Result<()> {
    let client = session::open_session(api)?;

    match args.command {
        SupportSubcommand::List => {
            let requests = client
                .support_requests()
                .await
                .context("Failed to fetch support requests")?;
            if requests.is_empty() {
                println!("{}", "No support requests.".dimmed());
                return Ok(());
            }
            for request in &requests {
                println!("{}", request.request);
            }
        }
        SupportSubcommand::Create(create) => {
            let created = client
                .create_support_request(&create.message)
                .await
                .context("Failed to file support request")?;
            output::success("Support request filed");
            output::field("Request id", &created.support_request_id);
        }
    }

    Ok(())
}
