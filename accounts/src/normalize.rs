//! Registration error-body normalization.
//!
//! The registration endpoint answers failures in several shapes: a map keyed
//! by field name, a map whose `error` key holds a single-quoted pseudo-JSON
//! object, or a bare string. [`ErrorBody::parse`] classifies a raw body into
//! one tagged variant and [`ErrorBody::message`] resolves it to exactly one
//! user-facing message.
//!
//! PRECEDENCE
//! ==========
//! `username` > `email` > `password` > `error` (nested) > `non_field_errors`
//! > generic fallback.

#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_test;

use serde_json::{Map, Value};

use crate::errors::{ApiError, RegistrationError};

/// Shown when nothing more specific can be extracted.
pub const GENERIC_FALLBACK: &str = "Error al registrar. el usuario y/o correo no son validos";
pub const USERNAME_FALLBACK: &str = "El nombre de usuario ya está en uso.";
pub const EMAIL_FALLBACK: &str = "El correo electrónico ya está registrado.";
pub const PASSWORD_FALLBACK: &str = "La contraseña no cumple con los requisitos.";
pub const NON_FIELD_FALLBACK: &str = "Error en el registro. Verifica tus datos.";

/// Raw response body as received from the transport.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
    Empty,
}

impl ResponseBody {
    /// Classify raw response text: JSON when it parses, plain text otherwise.
    #[must_use]
    pub fn from_text(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::Empty;
        }
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(raw.to_owned()),
        }
    }
}

/// Field keys of a [`ErrorBody::FieldErrorMap`], in precedence order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorField {
    Username,
    Email,
    Password,
    NonField,
}

impl ErrorField {
    const PRECEDENCE: [Self; 4] = [Self::Username, Self::Email, Self::Password, Self::NonField];

    /// JSON key used by the backend.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::NonField => "non_field_errors",
        }
    }

    fn fallback(self) -> &'static str {
        match self {
            Self::Username => USERNAME_FALLBACK,
            Self::Email => EMAIL_FALLBACK,
            Self::Password => PASSWORD_FALLBACK,
            Self::NonField => NON_FIELD_FALLBACK,
        }
    }
}

/// A classified registration error body.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorBody {
    /// The whole body is a plain string.
    StringError(String),
    /// Object keyed by field name.
    FieldErrorMap(Map<String, Value>),
    /// `error` holds a quoted-key object encoded as a string.
    NestedEncodedError(String),
    /// Nothing recognizable (arrays, numbers, empty bodies).
    Unrecognized,
}

impl ErrorBody {
    /// Classify a raw body.
    ///
    /// An object carrying `username`, `email` or `password` is a field map
    /// even when it also carries `error`, so field errors win over the nested
    /// encoding. An `error` key that is not a string is kept as an empty
    /// encoding and resolves to the password fallback.
    #[must_use]
    pub fn parse(body: &ResponseBody) -> Self {
        match body {
            ResponseBody::Text(text) => Self::StringError(text.clone()),
            ResponseBody::Json(Value::String(text)) => Self::StringError(text.clone()),
            ResponseBody::Json(Value::Object(map)) => {
                let has_field = [ErrorField::Username, ErrorField::Email, ErrorField::Password]
                    .iter()
                    .any(|field| map.get(field.key()).is_some_and(is_present));
                match map.get("error") {
                    Some(encoded) if !has_field => {
                        Self::NestedEncodedError(encoded.as_str().unwrap_or_default().to_owned())
                    }
                    _ => Self::FieldErrorMap(map.clone()),
                }
            }
            ResponseBody::Json(_) | ResponseBody::Empty => Self::Unrecognized,
        }
    }

    /// Resolve to the single message shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::StringError(text) if text.trim().is_empty() => GENERIC_FALLBACK.to_owned(),
            Self::StringError(text) => text.clone(),
            Self::FieldErrorMap(map) => ErrorField::PRECEDENCE
                .iter()
                .find_map(|field| {
                    map.get(field.key())
                        .filter(|value| is_present(value))
                        .map(|value| field_message(*field, value))
                })
                .unwrap_or_else(|| GENERIC_FALLBACK.to_owned()),
            Self::NestedEncodedError(encoded) => nested_message(encoded),
            Self::Unrecognized => GENERIC_FALLBACK.to_owned(),
        }
    }
}

/// Map a failed registration request to the error shown to the user.
#[must_use]
pub fn registration_failure(err: &ApiError) -> RegistrationError {
    match err {
        ApiError::NoResponse(_) => RegistrationError::Network,
        ApiError::Status { body, .. } => RegistrationError::Rejected(ErrorBody::parse(body).message()),
        ApiError::Decode(_) => RegistrationError::Rejected(GENERIC_FALLBACK.to_owned()),
    }
}

/// A field entry counts only when it carries something: `null`, `false` and
/// blank strings are skipped so the next field in precedence order is used.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(text) => !text.trim().is_empty(),
        _ => true,
    }
}

fn field_message(field: ErrorField, value: &Value) -> String {
    first_string(value).unwrap_or_else(|| field.fallback().to_owned())
}

fn first_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Array(items) => items
            .first()
            .and_then(Value::as_str)
            .filter(|text| !text.trim().is_empty())
            .map(str::to_owned),
        _ => None,
    }
}

/// Decode `{'password': ['...']}`-style strings.
///
/// Quote normalization is a plain `'` -> `"` swap, so messages containing
/// apostrophes fail to parse and fall back like any other malformed input.
fn nested_message(encoded: &str) -> String {
    let Some(decoded) = decode_quoted_object(encoded) else {
        return PASSWORD_FALLBACK.to_owned();
    };
    let Some(password) = decoded.get("password") else {
        return GENERIC_FALLBACK.to_owned();
    };
    let first = match password {
        Value::Array(items) => items.first(),
        other => Some(other),
    };
    match first {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Object(detail)) => detail
            .get("string")
            .and_then(Value::as_str)
            .map_or_else(|| PASSWORD_FALLBACK.to_owned(), str::to_owned),
        _ => PASSWORD_FALLBACK.to_owned(),
    }
}

/// Parse a single-quoted pseudo-JSON object. Returns `None` unless the result is an object.
#[must_use]
pub fn decode_quoted_object(encoded: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(&encoded.replace('\'', "\"")) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}
