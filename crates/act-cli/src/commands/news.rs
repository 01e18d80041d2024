//! News command implementation.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;

use act_rest::NewsKind;

use crate::session;

#[derive(Args, Debug)]
pub struct NewsArgs {
    /// Comma-separated tickers to filter by
    #[arg(long, default_value = "")]
    pub tickers: String,

    /// News category
    #[arg(long, value_enum, default_value_t = Kind::All)]
    pub kind: Kind,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Kind {
    All,
    Video,
    Press,
}

impl From<Kind> for NewsKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::All => NewsKind::All,
            Kind::Video => NewsKind::Video,
            Kind::Press => NewsKind::Press,
        }
    }
}

pub async fn run(api: &str, args: NewsArgs) -> Result<()> {
    let client = session::open_session(api)?;

    let articles = client
        .news(&args.tickers, args.kind.into())
        .await
        .context("Failed to fetch news")?;

    if articles.is_empty() {
        println!("{}", "No news.".dimmed());
        return Ok(());
    }

    for article in &articles {
        println!("{}", article.title.bold());
        if let Some(ref date) = article.date {
            println!("  {}", date.dimmed());
        }
        if let Some(ref text) = article.text {
            println!("  {}", text);
        }
        println!("  {}", article.url.underline());
        println!();
    }

    Ok(())
}
