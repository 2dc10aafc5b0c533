//! JSON file home for the CLI session tokens.
//!
//! The file holds `{"access": ..., "refresh": ...}`, the same keys the
//! browser client keeps in `localStorage`.

#[cfg(test)]
#[path = "session_file_test.rs"]
mod session_file_test;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use accounts::{StoreError, TokenPair, TokenStore};

#[derive(Clone, Debug)]
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
    fn load(&self) -> Option<TokenPair> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(tokens) => Some(tokens),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring unreadable session file");
                None
            }
        }
    }

    fn save(&self, tokens: &TokenPair) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(tokens).map_err(|e| StoreError(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| StoreError(format!("{}: {e}", self.path.display())))
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError(format!("{}: {e}", self.path.display()))),
        }
    }
}
