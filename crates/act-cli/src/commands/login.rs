//! Login command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;

use act_core::Credentials;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Username to authenticate with
    #[arg(long)]
    pub username: Option<String>,

    /// Email to authenticate with
    #[arg(long)]
    pub email: Option<String>,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(api: &str, args: LoginArgs) -> Result<()> {
    let credentials = match (args.username, args.email) {
        (Some(username), Some(email)) => Credentials::new(username, email, args.password),
        (Some(username), None) => Credentials::with_username(username, args.password),
        (None, Some(email)) => Credentials::with_email(email, args.password),
        (None, None) => bail!("Provide --username and/or --email"),
    };

    let client = session::open_session(api)?;

    eprintln!("{}", "Logging in...".dimmed());

    client
        .login(&credentials)
        .await
        .context("Failed to login")?;

    let user = client
        .user()
        .await
        .context("Failed to fetch user details")?;

    output::success("Logged in successfully");
    println!();
    output::field("User", &user.username);
    output::field("Role", &user.role.to_string());
    output::field("API", client.api().as_str());

    Ok(())
}
