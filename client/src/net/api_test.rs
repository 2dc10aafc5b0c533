use super::*;
use serde_json::json;

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn status_error_keeps_json_body() {
    let err = status_error(400, r#"{"username": ["ya existe"]}"#);
    assert_eq!(
        err,
        ApiError::Status { status: 400, body: ResponseBody::Json(json!({"username": ["ya existe"]})) }
    );
}

#[test]
fn status_error_keeps_text_body() {
    let err = status_error(502, "Bad Gateway");
    assert_eq!(err, ApiError::Status { status: 502, body: ResponseBody::Text("Bad Gateway".to_owned()) });
}

#[test]
fn url_joins_base_and_endpoint() {
    let api = BrowserApi::new("https://portal.example/api/");
    assert_eq!(api.url("/login/"), "https://portal.example/api/login/");
}

#[test]
fn default_base_url_is_configured() {
    assert!(!api_base_url().is_empty());
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn native_calls_report_the_configured_endpoint() {
    let api = BrowserApi::new("https://portal.example/api");
    let credentials = accounts::login::validate_login("ana", "pw").expect("valid");
    let err = api.login(&credentials).await.expect_err("no browser");
    assert_eq!(
        err,
        ApiError::NoResponse("https://portal.example/api/login/ is not reachable outside the browser".to_owned())
    );
}
