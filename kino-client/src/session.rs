//! Session state
//!
//! The bearer token outlives the process through a [`TokenStore`]; the
//! current user is held in memory only and is re-fetched on every start.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use shared::models::{CurrentUser, Role};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persistent slot for the bearer token
pub trait TokenStore {
    fn load(&self) -> Result<Option<String>, TokenStoreError>;
    fn persist(&self, token: &str) -> Result<(), TokenStoreError>;
    fn clear(&self) -> Result<(), TokenStoreError>;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct StoredToken {
    token: String,
    saved_at: i64,
}

/// Token persisted as a small JSON file
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, TokenStoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let stored: StoredToken = serde_json::from_str(&content)?;
        if stored.token.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(stored.token))
    }

    fn persist(&self, token: &str) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let stored = StoredToken {
            token: token.to_string(),
            saved_at: chrono::Utc::now().timestamp_millis(),
        };
        std::fs::write(&self.path, serde_json::to_string_pretty(&stored)?)?;
        tracing::debug!(path = %self.path.display(), "Token saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            tracing::debug!(path = %self.path.display(), "Token cleared");
        }
        Ok(())
    }
}

/// In-process token slot. Clones share the same slot, so a store handed to
/// one controller is still visible to the next one built from a clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(token.into()))),
        }
    }

    /// Current content of the slot
    pub fn peek(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set(&self, token: Option<String>) {
        *self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = token;
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, TokenStoreError> {
        Ok(self.peek().filter(|t| !t.trim().is_empty()))
    }

    fn persist(&self, token: &str) -> Result<(), TokenStoreError> {
        self.set(Some(token.to_string()));
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        self.set(None);
        Ok(())
    }
}

/// Session context: stored token plus the in-memory user
#[derive(Debug)]
pub struct Session<S> {
    store: S,
    token: Option<String>,
    user: Option<CurrentUser>,
}

impl<S: TokenStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            token: None,
            user: None,
        }
    }

    /// Pick up a token persisted by an earlier run
    pub fn restore(&mut self) -> Result<Option<String>, TokenStoreError> {
        self.user = None;
        self.token = self.store.load()?;
        Ok(self.token.clone())
    }

    /// Remember a freshly issued token; the user is fetched separately.
    /// The token is held in memory even when persisting it fails.
    pub fn begin(&mut self, token: String) -> Result<(), TokenStoreError> {
        let persisted = self.store.persist(&token);
        self.token = Some(token);
        self.user = None;
        persisted
    }

    pub fn set_user(&mut self, user: CurrentUser) {
        self.user = Some(user);
    }

    /// Drop token and user, in memory and in the store
    pub fn end(&mut self) -> Result<(), TokenStoreError> {
        self.token = None;
        self.user = None;
        self.store.clear()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn user(role: Role) -> CurrentUser {
        CurrentUser {
            id: 1,
            username: "alice".into(),
            email: None,
            role,
            balance: None,
        }
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(temp_dir.path().join("auth/token.json"));

        assert!(store.load().unwrap().is_none());
        store.persist("tok-1").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("tok-1"));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("token.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileTokenStore::new(&path);
        assert!(matches!(store.load(), Err(TokenStoreError::Json(_))));
    }

    #[test]
    fn test_memory_store_clones_share_slot() {
        let store = MemoryTokenStore::new();
        let other = store.clone();
        store.persist("shared").unwrap();
        assert_eq!(other.load().unwrap().as_deref(), Some("shared"));
        other.clear().unwrap();
        assert!(store.peek().is_none());
    }

    #[test]
    fn test_session_lifecycle() {
        let store = MemoryTokenStore::new();
        let mut session = Session::new(store.clone());
        assert!(session.restore().unwrap().is_none());

        session.begin("tok".into()).unwrap();
        assert_eq!(store.peek().as_deref(), Some("tok"));
        assert!(!session.is_authenticated());

        session.set_user(user(Role::Admin));
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::Admin));

        session.end().unwrap();
        assert!(session.user().is_none());
        assert!(session.token().is_none());
        assert!(store.peek().is_none());
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let mut session = Session::new(MemoryTokenStore::with_token("   "));
        assert!(session.restore().unwrap().is_none());
    }
}
