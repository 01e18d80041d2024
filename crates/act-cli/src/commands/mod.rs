//! Command implementations.

mod alerts;
mod assets;
mod chat;
mod clients;
mod dashboard;
mod funds;
mod login;
mod logout;
mod news;
mod orders;
mod portfolios;
mod predict;
mod purchase;
mod quote;
mod rating;
mod refresh_token;
mod register;
mod support;
mod whoami;

use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and persist the session
    Login(login::LoginArgs),

    /// Register a new account
    Register(register::RegisterArgs),

    /// Clear the persisted session
    Logout(logout::LogoutArgs),

    /// Display the active session and user
    Whoami(whoami::WhoamiArgs),

    /// Refresh the session's access token
    RefreshToken(refresh_token::RefreshTokenArgs),

    /// List assets, or show one by id
    Assets(assets::AssetsArgs),

    /// List portfolios
    Portfolios(portfolios::PortfoliosArgs),

    /// List clients
    Clients(clients::ClientsArgs),

    /// List funds
    Funds(funds::FundsArgs),

    /// List or place orders
    Orders(orders::OrdersArgs),

    /// Buy or sell a basket of stocks and cryptos
    Purchase(purchase::PurchaseArgs),

    /// Fetch the news feed
    News(news::NewsArgs),

    /// Request an AI forecast for a symbol
    Predict(predict::PredictArgs),

    /// Fetch the AI trade rating for a symbol
    Rating(rating::RatingArgs),

    /// Fetch the current quote for a symbol
    Quote(quote::QuoteArgs),

    /// Chat with the AI assistant
    Chat(chat::ChatArgs),

    /// List or file support requests
    Support(support::SupportArgs),

    /// Show a fund manager's dashboard
    Dashboard(dashboard::DashboardArgs),

    /// Manage price alerts
    Alerts(alerts::AlertsArgs),
}

pub async fn handle(api: &str, command: Commands) -> Result<()> {
    match command {
        Commands::Login(args) => login::run(api, args).await,
        Commands::Register(args) => register::run(api, args).await,
        Commands::Logout(args) => logout::run(api, args).await,
        Commands::Whoami(args) => whoami::run(api, args).await,
        Commands::RefreshToken(args) => refresh_token::run(api, args).await,
        Commands::Assets(args) => assets::run(api, args).await,
        Commands::Portfolios(args) => portfolios::run(api, args).await,
        Commands::Clients(args) => clients::run(api, args).await,
        Commands::Funds(args) => funds::run(api, args).await,
        Commands::Orders(args) => orders::run(api, args).await,
        Commands::Purchase(args) => purchase::run(api, args).await,
        Commands::News(args) => news::run(api, args).await,
        Commands::Predict(args) => predict::run(api, args).await,
        Commands::Rating(args) => rating::run(api, args).await,
        Commands::Quote(args) => quote::run(api, args).await,
        Commands::Chat(args) => chat::run(api, args).await,
        Commands::Support(args) => support::run(api, args).await,
        Commands::Dashboard(args) => dashboard::run(api, args).await,
        Commands::Alerts(args) => alerts::run(api, args).await,
    }
}
