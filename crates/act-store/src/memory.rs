//! In-memory store for tests and embedding.

use async_trait::async_trait;
use tokio::sync::RwLock;

use act_core::models::PriceAlert;
use act_core::store::{AlertStore, TokenStore};
use act_core::tokens::{AccessToken, RefreshToken};
use act_core::Result;

#[derive(Debug, Default)]
struct MemoryState {
    access_token: Option<String>,
    refresh_token: Option<String>,
    price_alerts: Vec<PriceAlert>,
}

/// A store that keeps everything in process memory.
///
/// Useful in tests and for embedders that manage persistence themselves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given tokens.
    pub fn with_tokens(access: Option<&str>, refresh: Option<&str>) -> Self {
        Self {
            state: RwLock::new(MemoryState {
                access_token: access.map(str::to_string),
                refresh_token: refresh.map(str::to_string),
                price_alerts: Vec::new(),
            }),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryStore {
    async fn access_token(&self) -> Result<Option<AccessToken>> {
        let state = self.state.read().await;
        Ok(state.access_token.clone().map(AccessToken::new))
    }

    async fn refresh_token(&self) -> Result<Option<RefreshToken>> {
        let state = self.state.read().await;
        Ok(state.refresh_token.clone().map(RefreshToken::new))
    }

    async fn put_tokens(
        &self,
        access: &AccessToken,
        refresh: Option<&RefreshToken>,
    ) -> Result<()> {
        let mut state = self.state.write().await;
        state.access_token = Some(access.as_str().to_string());
        state.refresh_token = refresh.map(|t| t.as_str().to_string());
        Ok(())
    }

    async fn put_access_token(&self, access: &AccessToken) -> Result<()> {
        let mut state = self.state.write().await;
        state.access_token = Some(access.as_str().to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut state = self.state.write().await;
        state.access_token = None;
        state.refresh_token = None;
        Ok(())
    }
}

#[async_trait]
impl AlertStore for MemoryStore {
    async fn alerts(&self) -> Result<Vec<PriceAlert>> {
        let state = self.state.read().await;
        Ok(state.price_alerts.clone())
    }

    async fn put_alerts(&self, alerts: &[PriceAlert]) -> Result<()> {
        let mut state = self.state.write().await;
        state.price_alerts = alerts.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn tokens_round_trip() {
        let store = MemoryStore::new();
        store
            .put_tokens(
                &AccessToken::new("tokA"),
                Some(&RefreshToken::new("refA")),
            )
            .await
            .unwrap();

        assert_eq!(
            store.access_token().await.unwrap().unwrap().as_str(),
            "tokA"
        );
        assert_eq!(
            store.refresh_token().await.unwrap().unwrap().as_str(),
            "refA"
        );

        store.clear().await.unwrap();
        assert!(store.access_token().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn with_tokens_pre_populates() {
        let store = MemoryStore::with_tokens(Some("tokA"), None);
        assert_eq!(
            store.access_token().await.unwrap().unwrap().as_str(),
            "tokA"
        );
        assert!(store.refresh_token().await.unwrap().is_none());
    }
}
