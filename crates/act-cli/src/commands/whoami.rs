//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(api: &str, _args: WhoamiArgs) -> Result<()> {
    let client = session::open_session(api)?;

    let claims = client
        .claims()
        .await
        .context("Failed to read session")?
        .context("No active session. Run 'act login' first.")?;

    let user = client
        .user()
        .await
        .context("Failed to fetch user details")?;

    output::field("User", &user.username);
    output::field("Email", &user.email);
    output::field("Role", &user.role.to_string());
    if let Some(expires_at) = claims.expires_at() {
        output::field("Token expires", &expires_at.to_rfc3339());
    }

    Ok(())
}
