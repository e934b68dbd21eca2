//! The persisted admin session.
//!
//! A single bearer credential authorizes every protected request. It is read
//! from the session file at startup, written on sign-in, and cleared on
//! sign-out or when the API rejects it with a 401.

use std::path::{Path, PathBuf};

use bodega_core::AuthToken;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur while persisting the session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Session file could not be read or written.
    #[error("session file error: {0}")]
    Io(#[from] std::io::Error),

    /// Session file contents are not valid.
    #[error("session file parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// On-disk shape of the session file.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    token: AuthToken,
}

/// Holder of the single bearer credential.
///
/// The in-memory copy is the source of truth while the process runs; the
/// session file exists so the credential survives restarts.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    token: RwLock<Option<AuthToken>>,
}

impl SessionStore {
    /// Load the session from `path`.
    ///
    /// A missing file means no session; a malformed file is treated the same
    /// way (the operator signs in again), but is logged.
    #[must_use]
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let token = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<PersistedSession>(&contents) {
                Ok(session) => Some(session.token),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "Ignoring malformed session file");
                    None
                }
            },
            Err(_) => None,
        };

        Self {
            path,
            token: RwLock::new(token),
        }
    }

    /// An empty, unauthenticated session (for tests and first runs).
    #[must_use]
    pub fn unauthenticated(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            token: RwLock::new(None),
        }
    }

    /// The session file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The current credential, if signed in.
    pub async fn token(&self) -> Option<AuthToken> {
        self.token.read().await.clone()
    }

    /// Whether a credential is present.
    pub async fn is_authenticated(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Store a fresh credential after sign-in and persist it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the session file cannot be written; the
    /// in-memory credential is kept either way so the running process stays
    /// signed in.
    pub async fn set(&self, token: AuthToken) -> Result<(), SessionError> {
        *self.token.write().await = Some(token.clone());

        let contents = serde_json::to_string_pretty(&PersistedSession { token })?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Drop the credential and remove the session file.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the session file exists but cannot be
    /// removed.
    pub async fn clear(&self) -> Result<(), SessionError> {
        *self.token.write().await = None;

        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(SessionError::Io(error)),
        }
    }

    /// Drop a credential the API has rejected.
    ///
    /// Best-effort: a failure to remove the stale session file is logged,
    /// not surfaced, since the caller is already handling an auth failure.
    pub async fn invalidate(&self) {
        if let Err(error) = self.clear().await {
            tracing::warn!(%error, "Failed to clear rejected session");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_session_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bodega-session-test-{name}-{}.json", std::process::id()))
    }

    #[tokio::test]
    async fn test_set_persists_and_load_restores() {
        let path = temp_session_path("restore");
        let store = SessionStore::unauthenticated(&path);
        store.set(AuthToken::new("tok-123")).await.unwrap();

        let reloaded = SessionStore::load(&path);
        assert_eq!(reloaded.token().await, Some(AuthToken::new("tok-123")));

        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_clear_removes_file_and_is_idempotent() {
        let path = temp_session_path("clear");
        let store = SessionStore::unauthenticated(&path);
        store.set(AuthToken::new("tok-123")).await.unwrap();

        store.clear().await.unwrap();
        assert!(!store.is_authenticated().await);
        assert!(!path.exists());

        // Clearing again is fine.
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_file_means_unauthenticated() {
        let store = SessionStore::load(temp_session_path("missing"));
        assert!(!store.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_malformed_file_ignored() {
        let path = temp_session_path("malformed");
        std::fs::write(&path, "not json").unwrap();

        let store = SessionStore::load(&path);
        assert!(!store.is_authenticated().await);

        std::fs::remove_file(&path).unwrap();
    }
}
