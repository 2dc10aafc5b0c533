use accounts::{LoginError, RegistrationError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("not logged in; run `portal-cli login` first")]
    NotLoggedIn,
    #[error("stored session could not be verified; the server rejected it or did not answer")]
    SessionUnverified,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Login(#[from] LoginError),
    #[error("{0}")]
    Registration(#[from] RegistrationError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
