//! REST API client for the portal backend.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native builds and tests: every call fails with [`ApiError::NoResponse`]
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Send failures map to `NoResponse`, non-2xx answers to `Status` carrying the
//! raw body for normalization, and undecodable success bodies to `Decode`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use accounts::api::{DEFAULT_BASE_URL, LOGIN_PATH, PROFILE_PATH, REGISTER_PATH, endpoint};
use accounts::{ApiError, Credentials, PortalApi, RegistrationPayload, TokenPair, User};
use async_trait::async_trait;

#[cfg(any(test, feature = "csr"))]
use accounts::ResponseBody;

#[cfg(feature = "csr")]
use accounts::session::ProfileResponse;

/// Base URL baked in at build time through `PORTAL_API_URL`.
pub fn api_base_url() -> &'static str {
    option_env!("PORTAL_API_URL").unwrap_or(DEFAULT_BASE_URL)
}

#[cfg(any(test, feature = "csr"))]
fn bearer(access_token: &str) -> String {
    format!("Bearer {access_token}")
}

#[cfg(any(test, feature = "csr"))]
fn status_error(status: u16, raw_body: &str) -> ApiError {
    ApiError::Status { status, body: ResponseBody::from_text(raw_body) }
}

/// `fetch`-backed implementation of [`PortalApi`].
#[derive(Clone, Debug)]
pub struct BrowserApi {
    base_url: String,
}

impl Default for BrowserApi {
    fn default() -> Self {
        Self::new(api_base_url())
    }
}

impl BrowserApi {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.to_owned() }
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    #[cfg(not(feature = "csr"))]
    fn unavailable(&self, path: &str) -> ApiError {
        ApiError::NoResponse(format!("{} is not reachable outside the browser", self.url(path)))
    }
}

#[cfg(feature = "csr")]
async fn checked(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let raw = resp.text().await.unwrap_or_default();
    Err(status_error(status, &raw))
}

#[async_trait(?Send)]
impl PortalApi for BrowserApi {
    async fn login(&self, credentials: &Credentials) -> Result<TokenPair, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.url(LOGIN_PATH))
                .json(credentials)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::NoResponse(e.to_string()))?;
            checked(resp)
                .await?
                .json::<TokenPair>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(self.unavailable(LOGIN_PATH))
        }
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<User, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.url(PROFILE_PATH))
                .header("Authorization", &bearer(access_token))
                .send()
                .await
                .map_err(|e| ApiError::NoResponse(e.to_string()))?;
            let body = checked(resp)
                .await?
                .json::<ProfileResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(body.usuario)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = access_token;
            Err(self.unavailable(PROFILE_PATH))
        }
    }

    async fn register(&self, payload: &RegistrationPayload) -> Result<u16, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.url(REGISTER_PATH))
                .json(payload)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::NoResponse(e.to_string()))?;
            Ok(checked(resp).await?.status())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = payload;
            Err(self.unavailable(REGISTER_PATH))
        }
    }
}
