//! Durable store traits.
//!
//! The store is the single source of truth for session tokens. Callers must
//! re-read it before every use rather than caching tokens across await
//! points, so that a token refreshed by another process (or another handle
//! onto the same store) is picked up immediately.

use async_trait::async_trait;

use crate::Result;
use crate::models::PriceAlert;
use crate::tokens::{AccessToken, RefreshToken};

/// Durable storage for session tokens.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Read the current access token.
    async fn access_token(&self) -> Result<Option<AccessToken>>;

    /// Read the current refresh token.
    async fn refresh_token(&self) -> Result<Option<RefreshToken>>;

    /// Persist a new token pair, replacing whatever was stored.
    ///
    /// Passing `None` for the refresh token clears any stored refresh token.
    async fn put_tokens(
        &self,
        access: &AccessToken,
        refresh: Option<&RefreshToken>,
    ) -> Result<()>;

    /// Persist a new access token, leaving the stored refresh token intact.
    async fn put_access_token(&self, access: &AccessToken) -> Result<()>;

    /// Remove all stored tokens.
    async fn clear(&self) -> Result<()>;
}

/// Durable storage for price alert definitions.
#[async_trait]
pub trait AlertStore: Send + Sync {
    /// Read all stored alerts.
    async fn alerts(&self) -> Result<Vec<PriceAlert>>;

    /// Replace the stored alerts with the given list.
    async fn put_alerts(&self, alerts: &[PriceAlert]) -> Result<()>;
}
