#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn load_is_empty_outside_browser() {
    assert!(LocalStorageTokenStore.load().is_none());
    assert!(LocalStorageTokenStore.access_token().is_none());
}

#[test]
fn save_and_clear_are_noops_outside_browser() {
    let tokens = TokenPair { access: "a".to_owned(), refresh: "r".to_owned() };
    assert!(LocalStorageTokenStore.save(&tokens).is_ok());
    assert!(LocalStorageTokenStore.clear().is_ok());
}

#[test]
fn storage_keys_match_api_client_contract() {
    assert_eq!(ACCESS_KEY, "access");
    assert_eq!(REFRESH_KEY, "refresh");
}
