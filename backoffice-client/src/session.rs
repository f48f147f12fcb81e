//! Session tokens and authentication events
//!
//! The HTTP layer never reaches into ambient storage for a token; whoever
//! constructs the client injects a [`SessionProvider`]. Reactions to
//! authentication failures (typically: navigate to the login route) are
//! injected the same way through [`AuthEvents`].

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

/// Source of the Bearer token attached to every request
///
/// Returning `None` sends the request unauthenticated.
pub trait SessionProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Fixed token, mostly useful in tests and one-off scripts
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl SessionProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Shared in-memory session, settable and clearable at runtime
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    token: Arc<RwLock<Option<String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().expect("session lock poisoned") = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.write().expect("session lock poisoned") = None;
    }
}

impl SessionProvider for SessionStore {
    fn token(&self) -> Option<String> {
        self.token.read().expect("session lock poisoned").clone()
    }
}

/// Persisted session credential
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub token: String,
    pub expires_at: Option<u64>,
}

impl Credential {
    pub fn new(token: impl Into<String>, expires_at: Option<u64>) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    pub fn is_expired(&self) -> bool {
        if let Some(expires_at) = self.expires_at {
            let now = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs();
            return now > expires_at;
        }
        false
    }
}

/// File-backed credential storage
///
/// Reads the credential on every lookup so an external login flow can
/// rewrite the file without restarting the client. Expired credentials
/// yield no token.
#[derive(Debug, Clone)]
pub struct CredentialFile {
    path: PathBuf,
}

impl CredentialFile {
    pub fn new(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        let path = base_path.into().join(filename);
        Self { path }
    }

    pub fn save(&self, credential: &Credential) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(credential)?;
        fs::write(&self.path, json)
    }

    pub fn load(&self) -> Option<Credential> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&json).ok()
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn delete(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionProvider for CredentialFile {
    fn token(&self) -> Option<String> {
        let credential = self.load()?;
        if credential.is_expired() {
            return None;
        }
        Some(credential.token)
    }
}

/// Hooks for authentication-related side effects
///
/// `on_unauthorized` is invoked exactly once per 401 response, before the
/// error is handed back to the caller. The embedding application decides
/// what "go to login" means.
#[async_trait::async_trait]
pub trait AuthEvents: Send + Sync {
    async fn on_unauthorized(&self);
}

/// Default hook that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAuthEvents;

#[async_trait::async_trait]
impl AuthEvents for NoopAuthEvents {
    async fn on_unauthorized(&self) {}
}
