//! Shared account model and submission flows for the job-portal frontends.
//!
//! This crate owns everything the browser client and the CLI agree on: the
//! REST DTOs, local form validation, registration error normalization, the
//! persisted token pair, and the async login/registration flows. Transport is
//! abstracted behind [`PortalApi`] so each frontend plugs in its own HTTP stack.

pub mod api;
pub mod errors;
pub mod flow;
pub mod login;
pub mod normalize;
pub mod register;
pub mod role;
pub mod session;

pub use api::PortalApi;
pub use errors::{ApiError, LoginError, RegistrationError, StoreError, ValidationError};
pub use flow::{LoginOutcome, logout, restore_session, submit_login, submit_registration};
pub use login::{Credentials, TokenPair};
pub use normalize::{ErrorBody, ResponseBody};
pub use register::{RegistrationForm, RegistrationPayload, ValidRegistration};
pub use role::Role;
pub use session::{MemoryTokenStore, TokenStore, User};
