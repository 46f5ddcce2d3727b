use bytes::Bytes;
use serde_json::json;

use storeit_core::config::BackendConfig;
use storeit_core::error::ErrorKind;
use storeit_core::types::Query;

use super::MemoryBackend;
use crate::factory::BackendFactory;

fn backend() -> MemoryBackend {
    MemoryBackend::new(&BackendConfig::default())
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let backend = backend();
    let db = backend.admin().databases;

    db.create_document("users", "u1", json!({ "email": "ann@x.com" }))
        .await
        .unwrap();
    let err = db
        .create_document("users", "u2", json!({ "email": "ann@x.com" }))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(backend.documents("users").len(), 1);
}

#[tokio::test]
async fn test_email_is_not_unique_in_other_collections() {
    let db = backend().admin().databases;
    db.create_document("files", "f1", json!({ "email": "ann@x.com" }))
        .await
        .unwrap();
    db.create_document("files", "f2", json!({ "email": "ann@x.com" }))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_created_document_has_system_attributes() {
    let db = backend().admin().databases;
    let doc = db
        .create_document("users", "u1", json!({ "email": "ann@x.com" }))
        .await
        .unwrap();
    assert_eq!(doc["$id"], "u1");
    assert!(doc["$createdAt"].is_string());
}

#[tokio::test]
async fn test_list_counts_before_limit() {
    let backend = backend();
    let db = backend.admin().databases;
    for i in 0..3 {
        db.create_document("files", &format!("f{i}"), json!({ "owner": "u1" }))
            .await
            .unwrap();
    }

    let list = db
        .list_documents("files", &[Query::equal("owner", ["u1"]), Query::Limit(2)])
        .await
        .unwrap();
    assert_eq!(list.total, 3);
    assert_eq!(list.documents.len(), 2);
}

#[tokio::test]
async fn test_otp_round_trip_creates_session() {
    let backend = backend();
    let account = backend.admin().account;

    let token = account.create_email_token("acc1", "Ann@X.com").await.unwrap();
    assert_eq!(token.user_id, "acc1");
    assert!(token.secret.is_empty());

    let code = backend.last_passcode("ann@x.com").unwrap();
    let session = account.create_session("acc1", &code).await.unwrap();
    assert!(!session.secret.is_empty());

    let me = backend.session(&session.secret).account.get().await.unwrap();
    assert_eq!(me.id, "acc1");
    assert_eq!(me.email, "ann@x.com");
}

#[tokio::test]
async fn test_existing_email_keeps_account_id() {
    let backend = backend();
    let account = backend.admin().account;

    account.create_email_token("first", "ann@x.com").await.unwrap();
    let again = account.create_email_token("second", "ann@x.com").await.unwrap();
    assert_eq!(again.user_id, "first");
}

#[tokio::test]
async fn test_passcode_is_single_use() {
    let backend = backend();
    let account = backend.admin().account;
    account.create_email_token("acc1", "ann@x.com").await.unwrap();
    let code = backend.last_passcode("ann@x.com").unwrap();

    account.create_session("acc1", &code).await.unwrap();
    let err = account.create_session("acc1", &code).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
}

#[tokio::test]
async fn test_wrong_passcode_rejected() {
    let backend = backend();
    let account = backend.admin().account;
    account.create_email_token("acc1", "ann@x.com").await.unwrap();

    let err = account.create_session("acc1", "not-it").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
}

#[tokio::test]
async fn test_delete_current_session() {
    let backend = backend();
    let admin = backend.admin().account;
    admin.create_email_token("acc1", "ann@x.com").await.unwrap();
    let code = backend.last_passcode("ann@x.com").unwrap();
    let session = admin.create_session("acc1", &code).await.unwrap();

    let handle = backend.session(&session.secret);
    handle.account.delete_session("current").await.unwrap();

    assert_eq!(backend.session_count(), 0);
    let err = handle.account.get().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
}

#[tokio::test]
async fn test_admin_handle_has_no_account() {
    let err = backend().admin().account.get().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
}

#[tokio::test]
async fn test_bucket_objects() {
    let backend = backend();
    let storage = backend.admin().storage;

    let stored = storage
        .create_file("files", "obj1", "a.txt", Bytes::from_static(b"hello"))
        .await
        .unwrap();
    assert_eq!(stored.size_original, 5);
    assert_eq!(backend.object("files", "obj1").unwrap().1, Bytes::from_static(b"hello"));

    storage.delete_file("files", "obj1").await.unwrap();
    assert!(backend.object("files", "obj1").is_none());
}
