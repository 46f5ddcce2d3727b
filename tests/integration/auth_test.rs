//! Integration tests for sign-up, passcode verification, and sessions.

mod helpers;

use http::StatusCode;
use serde_json::json;

use storeit_core::config::AppConfig;
use storeit_entity::user::DEFAULT_AVATAR;

#[tokio::test]
async fn test_sign_up_creates_one_user() {
    let app = helpers::TestApp::new();

    let account_id = app.sign_up("Ann", "ann@x.com").await;
    assert!(!account_id.is_empty());

    let users = app.backend.documents("users");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["fullName"], "Ann");
    assert_eq!(users[0]["email"], "ann@x.com");
    assert_eq!(users[0]["avatar"], DEFAULT_AVATAR);
    assert_eq!(users[0]["accountId"], account_id.as_str());
}

#[tokio::test]
async fn test_sign_up_existing_email_keeps_single_user() {
    let app = helpers::TestApp::new();

    let first = app.sign_up("Ann", "ann@x.com").await;
    let second = app.sign_up("Ann Again", "ann@x.com").await;

    assert_eq!(first, second);
    let users = app.backend.documents("users");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["fullName"], "Ann");
}

#[tokio::test]
async fn test_sign_up_rejects_invalid_input() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/sign-up",
            Some(json!({ "fullName": "Ann", "email": "not-an-email" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(app.backend.documents("users").is_empty());
}

#[tokio::test]
async fn test_verify_sets_exactly_one_session_cookie() {
    let app = helpers::TestApp::new();
    let account_id = app.sign_up("Ann", "ann@x.com").await;
    let passcode = app.backend.last_passcode("ann@x.com").unwrap();

    let response = app
        .request(
            "POST",
            "/api/auth/verify",
            Some(json!({ "accountId": account_id, "password": passcode })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(!response.body["data"]["sessionId"].as_str().unwrap().is_empty());

    let cookies = response.set_cookies("appwrite-session");
    assert_eq!(cookies.len(), 1);
    let cookie = &cookies[0];
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Secure"));
    assert!(cookie.contains("SameSite=Strict"));
    assert!(cookie.contains("Path=/"));
}

#[tokio::test]
async fn test_development_config_issues_secure_cookie() {
    let config = AppConfig::load("development").unwrap();
    let app = helpers::TestApp::with_config(config);
    let account_id = app.sign_up("Ann", "ann@x.com").await;
    let passcode = app.backend.last_passcode("ann@x.com").unwrap();

    let response = app
        .request(
            "POST",
            "/api/auth/verify",
            Some(json!({ "accountId": account_id, "password": passcode })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let cookies = response.set_cookies("appwrite-session");
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].contains("Secure"));
    assert!(cookies[0].contains("HttpOnly"));
}

#[tokio::test]
async fn test_verify_wrong_passcode() {
    let app = helpers::TestApp::new();
    let account_id = app.sign_up("Ann", "ann@x.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth/verify",
            Some(json!({ "accountId": account_id, "password": "wrong" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.set_cookies("appwrite-session").is_empty());
}

#[tokio::test]
async fn test_sign_in_unknown_email() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/sign-in",
            Some(json!({ "email": "ghost@x.com" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "User not found");
}

#[tokio::test]
async fn test_sign_in_returns_stored_account() {
    let app = helpers::TestApp::new();
    let account_id = app.sign_up("Ann", "ann@x.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth/sign-in",
            Some(json!({ "email": "ann@x.com" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["accountId"], account_id.as_str());
}

#[tokio::test]
async fn test_me_with_session() {
    let app = helpers::TestApp::new();
    let cookie = app.sign_in_as("Ann", "ann@x.com").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "ann@x.com");
    assert_eq!(response.body["data"]["fullName"], "Ann");
}

#[tokio::test]
async fn test_me_without_cookie() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_sign_out_ends_session() {
    let app = helpers::TestApp::new();
    let cookie = app.sign_in_as("Ann", "ann@x.com").await;

    let response = app
        .request("POST", "/api/auth/sign-out", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.set_cookies("appwrite-session").len(), 1);
    assert_eq!(app.backend.session_count(), 0);

    let me = app.request("GET", "/api/auth/me", None, Some(&cookie)).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}
