//! act-core - Core types and traits for the ACT trading platform client.

pub mod claims;
pub mod credentials;
pub mod error;
pub mod models;
pub mod store;
pub mod tokens;
pub mod types;

pub use claims::TokenClaims;
pub use credentials::Credentials;
pub use error::Error;
pub use models::{
    AlertDirection, Asset, ClientAccount, DashboardSummary, Fund, NewsArticle, Order, OrderSide,
    Portfolio, PriceAlert, Quote, Role, SupportRequest, User,
};
pub use store::{AlertStore, TokenStore};
pub use tokens::{AccessToken, RefreshToken};
pub use types::{ApiUrl, Symbol};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
