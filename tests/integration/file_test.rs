//! Integration tests for file upload and listing.

mod helpers;

use http::StatusCode;

use storeit_core::config::AppConfig;

#[tokio::test]
async fn test_upload_then_list() {
    let app = helpers::TestApp::new();
    let cookie = app.sign_in_as("Ann", "ann@x.com").await;

    let uploaded = app.upload("notes.pdf", b"%PDF-1.7", Some(&cookie)).await;
    assert_eq!(uploaded.status, StatusCode::CREATED, "{}", uploaded.text);
    assert_eq!(uploaded.body["data"]["type"], "document");
    assert_eq!(uploaded.body["data"]["size"], 8);
    assert_eq!(uploaded.body["data"]["owner"], app.user_id("ann@x.com").as_str());

    let listed = app.request("GET", "/api/files", None, Some(&cookie)).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["data"]["total"], 1);
    assert_eq!(listed.body["data"]["documents"][0]["name"], "notes.pdf");
}

#[tokio::test]
async fn test_upload_requires_session() {
    let app = helpers::TestApp::new();
    let response = app.upload("notes.pdf", b"data", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.backend.object_count(), 0);
}

#[tokio::test]
async fn test_upload_over_body_limit_is_413() {
    let mut config = AppConfig::default();
    config.storage.max_upload_size_bytes = 512;
    let app = helpers::TestApp::with_config(config);
    let cookie = app.sign_in_as("Ann", "ann@x.com").await;

    let response = app.upload("big.bin", &[7u8; 4096], Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE, "{}", response.text);
    assert_eq!(response.body["error"], "PAYLOAD_TOO_LARGE");
    assert_eq!(app.backend.object_count(), 0);
}

#[tokio::test]
async fn test_list_sorted_by_name() {
    let app = helpers::TestApp::new();
    let cookie = app.sign_in_as("Ann", "ann@x.com").await;

    for name in ["b.txt", "c.txt", "a.txt"] {
        let response = app.upload(name, b"x", Some(&cookie)).await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let listed = app
        .request("GET", "/api/files?sort=name-asc", None, Some(&cookie))
        .await;
    let names: Vec<_> = listed.body["data"]["documents"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["a.txt", "b.txt", "c.txt"]);
}

#[tokio::test]
async fn test_other_users_files_are_hidden() {
    let app = helpers::TestApp::new();
    let ann = app.sign_in_as("Ann", "ann@x.com").await;
    let bob = app.sign_in_as("Bob", "bob@x.com").await;

    app.upload("secret.txt", b"x", Some(&ann)).await;

    let listed = app.request("GET", "/api/files", None, Some(&bob)).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["data"]["total"], 0);
}
