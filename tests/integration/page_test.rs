//! Integration tests for the server-rendered pages.

mod helpers;

use http::{StatusCode, header};
use serde_json::json;

fn seeded_file(id: &str, owner: &str) -> serde_json::Value {
    json!({
        "$id": id,
        "$createdAt": "2024-05-01T10:00:00.000+00:00",
        "name": format!("{id}.png"),
        "url": format!("/view/{id}"),
        "type": "image",
        "extension": "png",
        "size": 2048,
        "owner": owner,
        "accountId": "acc",
        "users": [],
        "bucketFileId": id
    })
}

#[tokio::test]
async fn test_page_without_cookie_redirects_to_sign_in() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/documents", None, None).await;

    assert!(response.status.is_redirection());
    assert_eq!(response.headers.get(header::LOCATION).unwrap(), "/sign-in");
}

#[tokio::test]
async fn test_page_with_revoked_session_redirects() {
    let app = helpers::TestApp::new();
    let response = app
        .request("GET", "/", None, Some("appwrite-session=forged"))
        .await;
    assert!(response.status.is_redirection());
}

#[tokio::test]
async fn test_empty_listing() {
    let app = helpers::TestApp::new();
    let cookie = app.sign_in_as("Ann", "ann@x.com").await;

    let response = app.request("GET", "/documents", None, Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("documents"));
    assert!(response.text.contains("Total: 0 MB"));
    assert!(response.text.contains("No files uploaded"));
}

#[tokio::test]
async fn test_listing_renders_one_card_per_file() {
    let app = helpers::TestApp::new();
    let cookie = app.sign_in_as("Ann", "ann@x.com").await;
    let owner = app.user_id("ann@x.com");

    for id in ["f1", "f2", "f3"] {
        app.backend.seed_document("files", seeded_file(id, &owner));
    }
    app.backend.seed_document("files", seeded_file("other", "someone-else"));

    let response = app.request("GET", "/images", None, Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text.matches("class=\"file-card\"").count(), 3);
    for id in ["f1", "f2", "f3"] {
        assert!(response.text.contains(&format!("data-key=\"{id}\"")));
    }
    assert!(!response.text.contains("data-key=\"other\""));
    assert!(!response.text.contains("No files uploaded"));
}

#[tokio::test]
async fn test_root_renders_empty_heading() {
    let app = helpers::TestApp::new();
    let cookie = app.sign_in_as("Ann", "ann@x.com").await;

    let response = app.request("GET", "/", None, Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("<h1 class=\"h1 capitalize\"></h1>"));
}

#[tokio::test]
async fn test_sort_option_is_selected() {
    let app = helpers::TestApp::new();
    let cookie = app.sign_in_as("Ann", "ann@x.com").await;

    let response = app
        .request("GET", "/documents?sort=size-asc", None, Some(&cookie))
        .await;

    assert!(response.text.contains("value=\"size-asc\" selected"));
}

#[tokio::test]
async fn test_sign_in_page_renders() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/sign-in", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("Sign In"));
}
