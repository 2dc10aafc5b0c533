//! Browser `localStorage` home for the session tokens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the browser-only read/write glue so flows and components work
//! against `accounts::TokenStore`. Outside the browser every read is empty and
//! every write is a no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use accounts::session::{ACCESS_KEY, REFRESH_KEY};
use accounts::{StoreError, TokenPair, TokenStore};

/// Token store backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<TokenPair> {
        let access = read_item(ACCESS_KEY)?;
        let refresh = read_item(REFRESH_KEY)?;
        Some(TokenPair { access, refresh })
    }

    fn save(&self, tokens: &TokenPair) -> Result<(), StoreError> {
        write_item(ACCESS_KEY, &tokens.access)?;
        write_item(REFRESH_KEY, &tokens.refresh)
    }

    fn clear(&self) -> Result<(), StoreError> {
        remove_item(ACCESS_KEY)?;
        remove_item(REFRESH_KEY)
    }

    fn access_token(&self) -> Option<String> {
        read_item(ACCESS_KEY)
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| StoreError("localStorage unavailable".to_owned()))
}

fn read_item(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        local_storage().ok()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

fn write_item(key: &str, value: &str) -> Result<(), StoreError> {
    #[cfg(feature = "csr")]
    {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| StoreError(format!("could not write `{key}`")))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
        Ok(())
    }
}

fn remove_item(key: &str) -> Result<(), StoreError> {
    #[cfg(feature = "csr")]
    {
        local_storage()?
            .remove_item(key)
            .map_err(|_| StoreError(format!("could not remove `{key}`")))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        Ok(())
    }
}
