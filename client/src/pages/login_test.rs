use super::*;
use accounts::ValidationError;

#[test]
fn validation_failures_use_short_toast() {
    let err = LoginError::Validation(ValidationError::UsernameMissing);
    assert_eq!(failure_toast_duration(&err), SHORT_MS);
}

#[test]
fn rejected_login_uses_medium_toast() {
    assert_eq!(failure_toast_duration(&LoginError::Auth), MEDIUM_MS);
}

#[test]
fn validation_failure_has_inline_and_toast_text() {
    let err = LoginError::from(validate_login("", "").expect_err("both missing"));
    assert_eq!(err.inline_message().as_deref(), Some("Por favor ingresa tu usuario y contraseña."));
    assert_eq!(err.toast_message(), "Campos requeridos: usuario y contraseña");
}

#[test]
fn rejected_login_has_no_inline_text() {
    assert!(LoginError::Auth.inline_message().is_none());
}
