//! Transport seam for the portal REST API.
//!
//! Implementations live in the frontends: `gloo-net` in the browser client,
//! `reqwest` in the CLI. Futures are `?Send` because the browser event loop is
//! single-threaded.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::login::{Credentials, TokenPair};
use crate::register::RegistrationPayload;
use crate::session::User;

pub const LOGIN_PATH: &str = "/login/";
pub const PROFILE_PATH: &str = "/perfil-usuario/";
pub const REGISTER_PATH: &str = "/registro/";

/// Status the registration endpoint answers on success.
pub const REGISTER_CREATED: u16 = 201;

/// Default API base when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Join a base URL and an endpoint path without doubling slashes.
#[must_use]
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// REST operations the login and registration flows depend on.
#[async_trait(?Send)]
pub trait PortalApi {
    /// `POST /login/` exchanging credentials for a token pair.
    async fn login(&self, credentials: &Credentials) -> Result<TokenPair, ApiError>;

    /// `GET /perfil-usuario/` authorized with `access_token`.
    async fn fetch_profile(&self, access_token: &str) -> Result<User, ApiError>;

    /// `POST /registro/`. Returns the success status code.
    async fn register(&self, payload: &RegistrationPayload) -> Result<u16, ApiError>;
}
