//! Session persistence: a single slot that survives restarts.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::models::Session;
use crate::store::{StoreError, StoreResult};

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// The persisted session, if any. Unreadable or corrupt slots count as
    /// absent.
    async fn load(&self) -> Option<Session>;

    async fn save(&self, session: &Session) -> StoreResult<()>;

    async fn clear(&self) -> StoreResult<()>;
}

/// One JSON file holding the single session slot.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSessionStore { path: path.into() }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Option<Session> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "Failed to read session file");
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "Discarding corrupt session file");
                None
            }
        }
    }

    async fn save(&self, session: &Session) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(session)
            .map_err(|e| StoreError::Backend(format!("serialize session: {e}")))?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| StoreError::Backend(format!("write session file: {e}")))
    }

    async fn clear(&self) -> StoreResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Backend(format!("remove session file: {e}"))),
        }
    }
}
