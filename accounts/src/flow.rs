//! Login, registration, and session lifecycle flows.
//!
//! Each flow validates locally first and only then touches the network, so a
//! validation failure never reaches [`PortalApi`]. Loading flags and
//! notifications stay with the caller.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use crate::api::{PortalApi, REGISTER_CREATED};
use crate::errors::{ApiError, LoginError, RegistrationError};
use crate::login::validate_login;
use crate::normalize::registration_failure;
use crate::register::RegistrationForm;
use crate::role::destination_for;
use crate::session::{TokenStore, User};

/// Result of a successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginOutcome {
    pub user: User,
    /// Dashboard to navigate to; `None` for roles this client does not route.
    pub destination: Option<&'static str>,
}

/// Validate, exchange credentials, persist tokens, and resolve the landing route.
///
/// Tokens are persisted before the profile request, so they stay stored even
/// when that request fails.
///
/// # Errors
///
/// [`LoginError::Validation`] before any request; [`LoginError::Auth`] for
/// every transport, server or storage failure.
pub async fn submit_login<A, S>(api: &A, store: &S, username: &str, password: &str) -> Result<LoginOutcome, LoginError>
where
    A: PortalApi + ?Sized,
    S: TokenStore + ?Sized,
{
    let credentials = validate_login(username, password)?;

    let tokens = api.login(&credentials).await.map_err(|e| {
        log::warn!("login request failed: {e}");
        LoginError::Auth
    })?;
    store.save(&tokens).map_err(|e| {
        log::warn!("{e}");
        LoginError::Auth
    })?;

    let user = api.fetch_profile(&tokens.access).await.map_err(|e| {
        log::warn!("profile request failed: {e}");
        LoginError::Auth
    })?;

    let destination = destination_for(&user.rol);
    if destination.is_none() {
        log::warn!("no dashboard for role {:?}; staying on login", user.rol);
    }
    log::debug!("login succeeded for {}", credentials.username);
    Ok(LoginOutcome { user, destination })
}

/// Validate the form, build the role-specific payload, and submit it.
///
/// # Errors
///
/// [`RegistrationError::Validation`] before any request; otherwise the
/// normalized server message or [`RegistrationError::Network`].
pub async fn submit_registration<A>(api: &A, form: &RegistrationForm) -> Result<(), RegistrationError>
where
    A: PortalApi + ?Sized,
{
    let payload = form.validate()?.into_payload();

    match api.register(&payload).await {
        Ok(status) => {
            if status != REGISTER_CREATED {
                log::debug!("registration accepted with status {status}");
            }
            Ok(())
        }
        Err(e) => {
            log::warn!("registration failed: {e}");
            Err(registration_failure(&e))
        }
    }
}

/// Restore the session from persisted tokens on startup.
///
/// A stored token the server answers with an error status is cleared. When no
/// usable answer arrives the tokens are kept for the next attempt.
pub async fn restore_session<A, S>(api: &A, store: &S) -> Option<User>
where
    A: PortalApi + ?Sized,
    S: TokenStore + ?Sized,
{
    let access = store.access_token()?;
    match api.fetch_profile(&access).await {
        Ok(user) => Some(user),
        Err(ApiError::Status { status, .. }) => {
            log::debug!("stored session rejected with status {status}");
            if let Err(e) = store.clear() {
                log::warn!("{e}");
            }
            None
        }
        Err(e) => {
            log::warn!("session restore skipped: {e}");
            None
        }
    }
}

/// Tear down the session: forget both persisted tokens.
pub fn logout<S: TokenStore + ?Sized>(store: &S) {
    if let Err(e) = store.clear() {
        log::warn!("{e}");
    }
}
