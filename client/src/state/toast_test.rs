use super::*;

#[test]
fn toast_state_default_is_empty() {
    assert!(ToastState::default().current.is_none());
}

#[test]
fn show_replaces_visible_toast() {
    let mut state = ToastState::default();
    state.error("primero", MEDIUM_MS);
    let second = state.success("segundo");
    let current = state.current.expect("toast visible");
    assert_eq!(current.id, second);
    assert_eq!(current.message, "segundo");
    assert_eq!(current.level, ToastLevel::Success);
    assert_eq!(current.duration_ms, SHORT_MS);
}

#[test]
fn ids_are_unique_and_increasing() {
    let mut state = ToastState::default();
    let a = state.success("a");
    let b = state.success("b");
    assert!(b > a);
}

#[test]
fn dismiss_stale_id_keeps_newer_toast() {
    let mut state = ToastState::default();
    let old = state.error("viejo", LONG_MS);
    let new = state.error("nuevo", LONG_MS);
    assert!(!state.dismiss(old));
    assert!(state.current.is_some());
    assert!(state.dismiss(new));
    assert!(state.current.is_none());
}

#[test]
fn dismiss_on_empty_state_is_noop() {
    let mut state = ToastState::default();
    assert!(!state.dismiss(1));
}
