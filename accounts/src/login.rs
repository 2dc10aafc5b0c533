//! Login credentials and the token pair returned by `POST /login/`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Username/password pair. Exists only for the duration of one submission.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Check presence of both fields, reporting a combined error when both are empty.
///
/// Values are not trimmed: a whitespace-only username is sent to the server.
///
/// # Errors
///
/// Returns the matching [`ValidationError`] login variant.
pub fn validate_login(username: &str, password: &str) -> Result<Credentials, ValidationError> {
    match (username.is_empty(), password.is_empty()) {
        (true, true) => Err(ValidationError::BothMissing),
        (true, false) => Err(ValidationError::UsernameMissing),
        (false, true) => Err(ValidationError::PasswordMissing),
        (false, false) => Ok(Credentials { username: username.to_owned(), password: password.to_owned() }),
    }
}

/// Access/refresh pair issued on successful login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair")
            .field("access", &"<redacted>")
            .field("refresh", &"<redacted>")
            .finish()
    }
}
