//! Interfaces to the three backend services.

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

use storeit_core::result::AppResult;
use storeit_core::types::{DocumentList, Query};
use storeit_entity::account::{Account, EmailToken, Session};
use storeit_entity::file::StoredFile;

/// Schema-flexible document collections inside one database.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug + 'static {
    /// List documents matching every filter in `queries`.
    ///
    /// `total` counts all matches; `documents` is capped by any limit query.
    async fn list_documents(
        &self,
        collection_id: &str,
        queries: &[Query],
    ) -> AppResult<DocumentList<Value>>;

    /// Create a document with a caller-chosen id.
    ///
    /// Fails with `Conflict` when the id or a unique attribute is taken.
    async fn create_document(
        &self,
        collection_id: &str,
        document_id: &str,
        data: Value,
    ) -> AppResult<Value>;
}

/// The account and session service.
#[async_trait]
pub trait AccountService: Send + Sync + std::fmt::Debug + 'static {
    /// Email a one-time passcode.
    ///
    /// `user_id` is used when the email has no account yet; otherwise the
    /// existing account's id is returned in the token.
    async fn create_email_token(&self, user_id: &str, email: &str) -> AppResult<EmailToken>;

    /// Exchange an account id and passcode for a session.
    async fn create_session(&self, user_id: &str, secret: &str) -> AppResult<Session>;

    /// The account behind the handle's session.
    async fn get(&self) -> AppResult<Account>;

    /// Delete a session of the current account. `"current"` names the
    /// handle's own session.
    async fn delete_session(&self, session_id: &str) -> AppResult<()>;
}

/// Bucket object storage.
#[async_trait]
pub trait FileStorage: Send + Sync + std::fmt::Debug + 'static {
    /// Upload an object.
    async fn create_file(
        &self,
        bucket_id: &str,
        file_id: &str,
        file_name: &str,
        data: Bytes,
    ) -> AppResult<StoredFile>;

    /// Delete an object.
    async fn delete_file(&self, bucket_id: &str, file_id: &str) -> AppResult<()>;

    /// URL from which a browser can view the object.
    fn file_view_url(&self, bucket_id: &str, file_id: &str) -> String;
}
