//! Session model: the authenticated user and the persisted token pair.
//!
//! SYSTEM CONTEXT
//! ==============
//! Frontends persist the tokens under the keys [`ACCESS_KEY`] and
//! [`REFRESH_KEY`] (browser `localStorage`, or a session file for the CLI).
//! Every login overwrites both; logout clears both.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::errors::StoreError;
use crate::login::TokenPair;
use crate::role::Role;

pub const ACCESS_KEY: &str = "access";
pub const REFRESH_KEY: &str = "refresh";

/// Current user as returned under `usuario` by `GET /perfil-usuario/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Raw role; may hold values this client does not route.
    pub rol: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    /// Parsed role, or `None` when the backend sent an unrecognized value.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        Role::from_wire(&self.rol)
    }
}

/// Envelope of `GET /perfil-usuario/`.
#[derive(Clone, Debug, Deserialize)]
pub struct ProfileResponse {
    pub usuario: User,
}

/// Persistent key-value home of the session tokens.
pub trait TokenStore {
    /// Both tokens, if a complete pair is stored.
    fn load(&self) -> Option<TokenPair>;

    /// Persist both tokens, overwriting any previous pair.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing storage rejects the write.
    fn save(&self, tokens: &TokenPair) -> Result<(), StoreError>;

    /// Remove both tokens.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing storage rejects the removal.
    fn clear(&self) -> Result<(), StoreError>;

    /// Stored access token alone.
    fn access_token(&self) -> Option<String> {
        self.load().map(|tokens| tokens.access)
    }
}

/// In-process token store, used by tests and non-persistent sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<Option<TokenPair>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tokens(tokens: TokenPair) -> Self {
        Self { tokens: Mutex::new(Some(tokens)) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<TokenPair> {
        self.tokens.lock().ok().and_then(|guard| guard.clone())
    }

    fn save(&self, tokens: &TokenPair) -> Result<(), StoreError> {
        let mut guard = self.tokens.lock().map_err(|e| StoreError(e.to_string()))?;
        *guard = Some(tokens.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut guard = self.tokens.lock().map_err(|e| StoreError(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}
