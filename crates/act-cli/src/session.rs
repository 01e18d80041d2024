//! Session construction backed by the persisted store.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use act_core::types::ApiUrl;
use act_rest::Session;
use act_store::FileStore;

/// Get the session file path.
fn store_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "act").context("Could not determine config directory")?;
    Ok(dirs.data_dir().join("session.json"))
}

/// Open the durable store backing sessions and alerts.
pub fn open_store() -> Result<FileStore> {
    Ok(FileStore::new(store_path()?))
}

/// Build a session against the given API, backed by the persisted store.
pub fn open_session(api: &str) -> Result<Session> {
    let api = ApiUrl::new(api).context("Invalid API URL")?;
    let store = open_store()?;
    Ok(Session::new(api, Arc::new(store)))
}
