//! Per-device session identity.
//!
//! Analytics events are attributed to an opaque session token rather than an
//! authenticated user. The token is minted once per device, persisted in a
//! local blob store, and reused on every subsequent run.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{Result, VetrinaError};

/// Storage seam for the session token: a single string value under a fixed
/// key. The production impl is a file on disk; tests swap in memory.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, token: &str) -> Result<()>;
}

/// Token file on local disk.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok(if token.is_empty() {
                    None
                } else {
                    Some(token.to_string())
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(VetrinaError::SessionStore(e.to_string())),
        }
    }

    fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| VetrinaError::SessionStore(e.to_string()))?;
        }
        std::fs::write(&self.path, token).map_err(|e| VetrinaError::SessionStore(e.to_string()))
    }
}

/// In-memory store for tests and embedders that manage persistence
/// themselves.
#[derive(Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a token, as if a previous run had persisted one.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.lock().unwrap().clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }
}

/// The resolved session identity, constructed once and passed by reference
/// to the components that attribute analytics events.
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
}

impl Session {
    /// Return the persisted token, minting and persisting a fresh uuid-v4
    /// token on first run.
    ///
    /// A failing store never fails the caller: the session falls back to an
    /// ephemeral token for this process lifetime and the error is logged.
    pub fn open(store: &dyn SessionStore) -> Self {
        match store.load() {
            Ok(Some(token)) => Session { id: token },
            Ok(None) => {
                let token = uuid::Uuid::new_v4().to_string();
                if let Err(e) = store.save(&token) {
                    tracing::error!("[session] Failed to persist session token: {}", e);
                }
                Session { id: token }
            }
            Err(e) => {
                tracing::error!("[session] Failed to read session token: {}", e);
                Session {
                    id: uuid::Uuid::new_v4().to_string(),
                }
            }
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}
