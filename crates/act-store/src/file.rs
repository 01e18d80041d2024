//! File-backed durable store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use act_core::error::{Error, StoreError};
use act_core::models::PriceAlert;
use act_core::store::{AlertStore, TokenStore};
use act_core::tokens::{AccessToken, RefreshToken};
use act_core::Result;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// The persisted document. Tokens and alerts live under fixed keys in one
/// JSON file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredState {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    price_alerts: Vec<PriceAlert>,
}

/// A durable store backed by a single JSON file.
///
/// Every read goes back to the file, so a token refreshed through another
/// handle (or another process sharing the file) is observed on the next
/// access. Writes go through a temporary file and rename, so readers never
/// see a half-written document.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given file path.
    ///
    /// The file is created on first write; a missing file reads as an empty
    /// state.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_state(&self) -> Result<StoredState> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(StoredState::default());
            }
            Err(e) => {
                return Err(StoreError::Io {
                    message: format!("failed to read {}: {}", self.path.display(), e),
                }
                .into());
            }
        };

        serde_json::from_str(&json).map_err(|e| {
            StoreError::Corrupt {
                message: format!("{}: {}", self.path.display(), e),
            }
            .into()
        })
    }

    async fn write_state(&self, state: &StoredState) -> Result<()> {
        let json = serde_json::to_string_pretty(state).map_err(|e| StoreError::Corrupt {
            message: e.to_string(),
        })?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| map_io(&self.path, e))?;
        }

        // Write to a sibling temp file and rename into place so concurrent
        // readers never observe a partial document.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json)
            .await
            .map_err(|e| map_io(&tmp, e))?;

        // Session files hold credentials; keep them private to the user.
        #[cfg(unix)]
        {
            let perms = std::fs::Permissions::from_mode(0o600);
            tokio::fs::set_permissions(&tmp, perms)
                .await
                .map_err(|e| map_io(&tmp, e))?;
        }

        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| map_io(&self.path, e))?;

        debug!(path = %self.path.display(), "persisted store state");
        Ok(())
    }
}

fn map_io(path: &Path, err: std::io::Error) -> Error {
    StoreError::Io {
        message: format!("{}: {}", path.display(), err),
    }
    .into()
}

#[async_trait]
impl TokenStore for FileStore {
    async fn access_token(&self) -> Result<Option<AccessToken>> {
        let state = self.read_state().await?;
        Ok(state.access_token.map(AccessToken::new))
    }

    async fn refresh_token(&self) -> Result<Option<RefreshToken>> {
        let state = self.read_state().await?;
        Ok(state.refresh_token.map(RefreshToken::new))
    }

    async fn put_tokens(
        &self,
        access: &AccessToken,
        refresh: Option<&RefreshToken>,
    ) -> Result<()> {
        let mut state = self.read_state().await?;
        state.access_token = Some(access.as_str().to_string());
        state.refresh_token = refresh.map(|t| t.as_str().to_string());
        self.write_state(&state).await
    }

    async fn put_access_token(&self, access: &AccessToken) -> Result<()> {
        let mut state = self.read_state().await?;
        state.access_token = Some(access.as_str().to_string());
        self.write_state(&state).await
    }

    async fn clear(&self) -> Result<()> {
        let mut state = self.read_state().await?;
        state.access_token = None;
        state.refresh_token = None;
        self.write_state(&state).await
    }
}

#[async_trait]
impl AlertStore for FileStore {
    async fn alerts(&self) -> Result<Vec<PriceAlert>> {
        let state = self.read_state().await?;
        Ok(state.price_alerts)
    }

    async fn put_alerts(&self, alerts: &[PriceAlert]) -> Result<()> {
        let mut state = self.read_state().await?;
        state.price_alerts = alerts.to_vec();
        self.write_state(&state).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use act_core::models::AlertDirection;
    use act_core::types::Symbol;

    fn store_in(dir: &tempfile::TempDir) -> FileStore {
        FileStore::new(dir.path().join("session.json"))
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.access_token().await.unwrap().is_none());
        assert!(store.refresh_token().await.unwrap().is_none());
        assert!(store.alerts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn tokens_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store
            .put_tokens(
                &AccessToken::new("tokA"),
                Some(&RefreshToken::new("refA")),
            )
            .await
            .unwrap();

        // A second handle onto the same file sees the tokens.
        let other = store_in(&dir);
        assert_eq!(
            other.access_token().await.unwrap().unwrap().as_str(),
            "tokA"
        );
        assert_eq!(
            other.refresh_token().await.unwrap().unwrap().as_str(),
            "refA"
        );
    }

    #[tokio::test]
    async fn put_access_token_preserves_refresh_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store
            .put_tokens(
                &AccessToken::new("tokA"),
                Some(&RefreshToken::new("refA")),
            )
            .await
            .unwrap();
        store
            .put_access_token(&AccessToken::new("tokB"))
            .await
            .unwrap();

        assert_eq!(
            store.access_token().await.unwrap().unwrap().as_str(),
            "tokB"
        );
        assert_eq!(
            store.refresh_token().await.unwrap().unwrap().as_str(),
            "refA"
        );
    }

    #[tokio::test]
    async fn clear_removes_tokens_but_keeps_alerts() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let alert = PriceAlert::new(Symbol::new("AAPL").unwrap(), 150.0, AlertDirection::Above);
        store.put_alerts(&[alert]).await.unwrap();
        store
            .put_tokens(&AccessToken::new("tokA"), None)
            .await
            .unwrap();

        store.clear().await.unwrap();

        assert!(store.access_token().await.unwrap().is_none());
        assert_eq!(store.alerts().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn picks_up_external_file_mutation() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store
            .put_tokens(&AccessToken::new("tokA"), None)
            .await
            .unwrap();
        assert_eq!(
            store.access_token().await.unwrap().unwrap().as_str(),
            "tokA"
        );

        // Another process rewrites the file out from under us.
        std::fs::write(
            store.path(),
            r#"{"access_token": "tokB", "refresh_token": "refB", "price_alerts": []}"#,
        )
        .unwrap();

        assert_eq!(
            store.access_token().await.unwrap().unwrap().as_str(),
            "tokB"
        );
    }

    #[tokio::test]
    async fn corrupt_file_surfaces_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{not json").unwrap();

        assert!(store.access_token().await.is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn session_file_is_private() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store
            .put_tokens(&AccessToken::new("tokA"), None)
            .await
            .unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
