use super::*;
use crate::errors::{ApiError, ValidationError};
use crate::login::{Credentials, TokenPair};
use crate::normalize::ResponseBody;
use crate::register::RegistrationPayload;
use crate::role::Role;
use crate::session::MemoryTokenStore;
use async_trait::async_trait;
use std::sync::Mutex;

// =========================================================================
// MockApi
// =========================================================================

struct MockApi {
    login: Result<TokenPair, ApiError>,
    profile: Result<User, ApiError>,
    register: Result<u16, ApiError>,
    calls: Mutex<Vec<String>>,
}

impl MockApi {
    fn new() -> Self {
        Self {
            login: Ok(tokens()),
            profile: Ok(user("candidato")),
            register: Ok(201),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl PortalApi for MockApi {
    async fn login(&self, credentials: &Credentials) -> Result<TokenPair, ApiError> {
        self.calls.lock().unwrap().push(format!("login:{}", credentials.username));
        self.login.clone()
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<User, ApiError> {
        self.calls.lock().unwrap().push(format!("profile:{access_token}"));
        self.profile.clone()
    }

    async fn register(&self, payload: &RegistrationPayload) -> Result<u16, ApiError> {
        self.calls.lock().unwrap().push(format!("register:{}", payload.username));
        self.register.clone()
    }
}

fn tokens() -> TokenPair {
    TokenPair { access: "acc".to_owned(), refresh: "ref".to_owned() }
}

fn user(rol: &str) -> User {
    User {
        rol: rol.to_owned(),
        first_name: "Ana".to_owned(),
        last_name: String::new(),
        username: Some("ana".to_owned()),
        email: None,
    }
}

fn candidate_form() -> RegistrationForm {
    RegistrationForm {
        username: "ana".to_owned(),
        email: "ana@example.com".to_owned(),
        password: "supersecreta".to_owned(),
        confirm_password: "supersecreta".to_owned(),
        role: Role::Candidate,
        first_name: "Ana".to_owned(),
        last_name: "Pérez".to_owned(),
        phone: "555".to_owned(),
        city: "Quito".to_owned(),
        experience: "2".to_owned(),
        education: "BSc".to_owned(),
        skills: "Rust".to_owned(),
        ..RegistrationForm::default()
    }
}

// =========================================================================
// submit_login
// =========================================================================

#[tokio::test]
async fn login_validation_failure_makes_no_request() {
    let api = MockApi::new();
    let store = MemoryTokenStore::new();
    let err = submit_login(&api, &store, "", "").await.expect_err("blocked");
    assert_eq!(err, LoginError::Validation(ValidationError::BothMissing));
    assert!(api.calls().is_empty());
    assert!(store.load().is_none());
}

#[tokio::test]
async fn candidate_login_routes_to_candidate_dashboard() {
    let api = MockApi::new();
    let store = MemoryTokenStore::new();
    let outcome = submit_login(&api, &store, "ana", "pw").await.expect("login");
    assert_eq!(outcome.destination, Some("/candidato"));
    assert_eq!(api.calls(), vec!["login:ana".to_owned(), "profile:acc".to_owned()]);
    assert_eq!(store.load(), Some(tokens()));
}

#[tokio::test]
async fn recruiter_login_routes_to_recruiter_dashboard() {
    let api = MockApi { profile: Ok(user("reclutador")), ..MockApi::new() };
    let store = MemoryTokenStore::new();
    let outcome = submit_login(&api, &store, "ana", "pw").await.expect("login");
    assert_eq!(outcome.destination, Some("/reclutador"));
}

#[tokio::test]
async fn unknown_role_logs_in_without_destination() {
    let api = MockApi { profile: Ok(user("admin")), ..MockApi::new() };
    let store = MemoryTokenStore::new();
    let outcome = submit_login(&api, &store, "ana", "pw").await.expect("login");
    assert_eq!(outcome.destination, None);
    assert_eq!(outcome.user.rol, "admin");
}

#[tokio::test]
async fn rejected_credentials_yield_generic_auth_error() {
    let api = MockApi {
        login: Err(ApiError::Status { status: 401, body: ResponseBody::Empty }),
        ..MockApi::new()
    };
    let store = MemoryTokenStore::new();
    let err = submit_login(&api, &store, "ana", "bad").await.expect_err("rejected");
    assert_eq!(err, LoginError::Auth);
    assert!(store.load().is_none());
}

#[tokio::test]
async fn network_failure_on_login_is_indistinct_from_auth_failure() {
    let api = MockApi { login: Err(ApiError::NoResponse("offline".to_owned())), ..MockApi::new() };
    let store = MemoryTokenStore::new();
    let err = submit_login(&api, &store, "ana", "pw").await.expect_err("offline");
    assert_eq!(err, LoginError::Auth);
    assert_eq!(err.toast_message(), "Credenciales inválidas. Por favor, verifica tus datos.");
    assert!(err.inline_message().is_none());
}

#[tokio::test]
async fn profile_failure_keeps_stored_tokens() {
    let api = MockApi { profile: Err(ApiError::Decode("bad json".to_owned())), ..MockApi::new() };
    let store = MemoryTokenStore::new();
    let err = submit_login(&api, &store, "ana", "pw").await.expect_err("profile failed");
    assert_eq!(err, LoginError::Auth);
    assert_eq!(store.load(), Some(tokens()));
}

#[tokio::test]
async fn login_overwrites_previous_tokens() {
    let api = MockApi::new();
    let store = MemoryTokenStore::with_tokens(TokenPair { access: "old".to_owned(), refresh: "old".to_owned() });
    submit_login(&api, &store, "ana", "pw").await.expect("login");
    assert_eq!(store.load(), Some(tokens()));
}

// =========================================================================
// submit_registration
// =========================================================================

#[tokio::test]
async fn registration_validation_failure_makes_no_request() {
    let api = MockApi::new();
    let form = RegistrationForm { password: "corta".to_owned(), confirm_password: "corta".to_owned(), ..candidate_form() };
    let err = submit_registration(&api, &form).await.expect_err("blocked");
    assert_eq!(err, RegistrationError::Validation(ValidationError::PasswordTooShort));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn registration_success_submits_once() {
    let api = MockApi::new();
    submit_registration(&api, &candidate_form()).await.expect("registered");
    assert_eq!(api.calls(), vec!["register:ana".to_owned()]);
}

#[tokio::test]
async fn registration_server_error_is_normalized() {
    let api = MockApi {
        register: Err(ApiError::Status {
            status: 400,
            body: ResponseBody::Json(serde_json::json!({"email": ["ya registrado"], "username": ["ya existe"]})),
        }),
        ..MockApi::new()
    };
    let err = submit_registration(&api, &candidate_form()).await.expect_err("rejected");
    assert_eq!(err.to_string(), "ya existe");
}

#[tokio::test]
async fn registration_without_response_reports_network_error() {
    let api = MockApi { register: Err(ApiError::NoResponse("timeout".to_owned())), ..MockApi::new() };
    let err = submit_registration(&api, &candidate_form()).await.expect_err("offline");
    assert_eq!(err, RegistrationError::Network);
}

// =========================================================================
// Session lifecycle
// =========================================================================

#[tokio::test]
async fn restore_without_tokens_skips_request() {
    let api = MockApi::new();
    let store = MemoryTokenStore::new();
    assert!(restore_session(&api, &store).await.is_none());
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn restore_with_valid_token_loads_user() {
    let api = MockApi::new();
    let store = MemoryTokenStore::with_tokens(tokens());
    let restored = restore_session(&api, &store).await.expect("user");
    assert_eq!(restored.rol, "candidato");
    assert_eq!(api.calls(), vec!["profile:acc".to_owned()]);
}

#[tokio::test]
async fn restore_with_rejected_token_clears_store() {
    let api = MockApi {
        profile: Err(ApiError::Status { status: 401, body: ResponseBody::Empty }),
        ..MockApi::new()
    };
    let store = MemoryTokenStore::with_tokens(tokens());
    assert!(restore_session(&api, &store).await.is_none());
    assert!(store.load().is_none());
}

#[tokio::test]
async fn restore_with_network_failure_keeps_tokens() {
    let api = MockApi { profile: Err(ApiError::NoResponse("offline".to_owned())), ..MockApi::new() };
    let store = MemoryTokenStore::with_tokens(tokens());
    assert!(restore_session(&api, &store).await.is_none());
    assert_eq!(store.load(), Some(tokens()));
}

#[tokio::test]
async fn restore_with_undecodable_profile_keeps_tokens() {
    let api = MockApi { profile: Err(ApiError::Decode("bad json".to_owned())), ..MockApi::new() };
    let store = MemoryTokenStore::with_tokens(tokens());
    assert!(restore_session(&api, &store).await.is_none());
    assert_eq!(store.load(), Some(tokens()));
}

#[test]
fn logout_clears_both_tokens() {
    let store = MemoryTokenStore::with_tokens(tokens());
    logout(&store);
    assert!(store.load().is_none());
}
