use super::*;

fn tokens() -> TokenPair {
    TokenPair { access: "acc".to_owned(), refresh: "ref".to_owned() }
}

#[test]
fn missing_file_loads_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileTokenStore::new(dir.path().join("session.json"));
    assert!(store.load().is_none());
}

#[test]
fn save_then_load_uses_access_and_refresh_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileTokenStore::new(dir.path().join("session.json"));
    store.save(&tokens()).expect("save");

    let raw = fs::read_to_string(store.path()).expect("read");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(value["access"], "acc");
    assert_eq!(value["refresh"], "ref");
    assert_eq!(store.access_token().as_deref(), Some("acc"));
}

#[test]
fn clear_removes_file_and_tolerates_absence() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileTokenStore::new(dir.path().join("session.json"));
    store.save(&tokens()).expect("save");
    store.clear().expect("clear");
    assert!(!store.path().exists());
    store.clear().expect("second clear");
}

#[test]
fn corrupt_file_loads_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session.json");
    fs::write(&path, "not json").expect("write");
    assert!(FileTokenStore::new(path).load().is_none());
}
