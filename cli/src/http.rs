//! `reqwest` implementation of the portal transport.
//!
//! ERROR HANDLING
//! ==============
//! Send failures become `ApiError::NoResponse`; non-2xx answers become
//! `ApiError::Status` with the raw body kept for normalization.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use accounts::api::{LOGIN_PATH, PROFILE_PATH, REGISTER_PATH, endpoint};
use accounts::session::ProfileResponse;
use accounts::{ApiError, Credentials, PortalApi, RegistrationPayload, ResponseBody, TokenPair, User};
use async_trait::async_trait;
use reqwest::{Client, Response};

#[derive(Clone, Debug)]
pub struct ReqwestApi {
    client: Client,
    base_url: String,
}

impl ReqwestApi {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self { client, base_url: base_url.to_owned() })
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    /// Any HTTP answer from the base URL counts as reachable.
    pub async fn ping(&self) -> Result<u16, reqwest::Error> {
        let response = self.client.get(&self.base_url).send().await?;
        Ok(response.status().as_u16())
    }
}

fn no_response(err: reqwest::Error) -> ApiError {
    ApiError::NoResponse(err.to_string())
}

fn decode(err: reqwest::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

async fn checked(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let raw = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status: status.as_u16(), body: ResponseBody::from_text(&raw) })
}

#[async_trait(?Send)]
impl PortalApi for ReqwestApi {
    async fn login(&self, credentials: &Credentials) -> Result<TokenPair, ApiError> {
        let response = self
            .client
            .post(self.url(LOGIN_PATH))
            .json(credentials)
            .send()
            .await
            .map_err(no_response)?;
        checked(response).await?.json::<TokenPair>().await.map_err(decode)
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<User, ApiError> {
        let response = self
            .client
            .get(self.url(PROFILE_PATH))
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(no_response)?;
        let body = checked(response).await?.json::<ProfileResponse>().await.map_err(decode)?;
        Ok(body.usuario)
    }

    async fn register(&self, payload: &RegistrationPayload) -> Result<u16, ApiError> {
        let response = self
            .client
            .post(self.url(REGISTER_PATH))
            .json(payload)
            .send()
            .await
            .map_err(no_response)?;
        Ok(checked(response).await?.status().as_u16())
    }
}
