//! Service implementations for memory handles.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{Duration, SecondsFormat, Utc};
use serde_json::Value;
use uuid::Uuid;

use storeit_core::error::AppError;
use storeit_core::result::AppResult;
use storeit_core::types::id::{is_valid_id, unique_id};
use storeit_core::types::{DocumentList, Query};
use storeit_entity::account::{Account, EmailToken, Session};
use storeit_entity::file::StoredFile;

use super::query::{matches_all, order_and_limit};
use super::{
    MemoryState, PendingToken, SESSION_TTL_DAYS, StoredObject, TOKEN_TTL_MINUTES, object_key,
};
use crate::factory::Credential;
use crate::traits::{AccountService, DocumentStore, FileStorage};

/// One credential's view of the shared memory state.
#[derive(Debug, Clone)]
pub(super) struct MemoryClient {
    state: Arc<MemoryState>,
    credential: Credential,
}

impl MemoryClient {
    pub(super) fn new(state: Arc<MemoryState>, credential: Credential) -> Self {
        Self { state, credential }
    }

    /// The live session behind this handle.
    fn current_session(&self) -> AppResult<Session> {
        let secret = self
            .credential
            .session_secret()
            .ok_or_else(|| AppError::authentication("Handle is not scoped to a session"))?;

        let session = self
            .state
            .sessions
            .get(secret)
            .map(|s| s.value().clone())
            .ok_or_else(|| AppError::authentication("Session not found or revoked"))?;

        if session.is_expired() {
            self.state.sessions.remove(secret);
            return Err(AppError::authentication("Session expired"));
        }
        Ok(session)
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn passcode() -> String {
    format!("{:06}", Uuid::new_v4().as_u128() % 1_000_000)
}

#[async_trait]
impl DocumentStore for MemoryClient {
    async fn list_documents(
        &self,
        collection_id: &str,
        queries: &[Query],
    ) -> AppResult<DocumentList<Value>> {
        let mut documents: Vec<Value> = self
            .state
            .collections
            .get(collection_id)
            .map(|docs| {
                docs.iter()
                    .filter(|d| matches_all(d, queries))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        let total = documents.len() as u64;
        order_and_limit(&mut documents, queries);

        Ok(DocumentList { total, documents })
    }

    async fn create_document(
        &self,
        collection_id: &str,
        document_id: &str,
        data: Value,
    ) -> AppResult<Value> {
        if !is_valid_id(document_id) {
            return Err(AppError::validation(format!(
                "Invalid document id: '{document_id}'"
            )));
        }
        let Value::Object(mut fields) = data else {
            return Err(AppError::validation("Document data must be a JSON object"));
        };

        let now = timestamp();
        fields.insert("$id".into(), Value::from(document_id));
        fields.insert("$collectionId".into(), Value::from(collection_id));
        fields.insert("$createdAt".into(), Value::from(now.clone()));
        fields.insert("$updatedAt".into(), Value::from(now));
        let document = Value::Object(fields);

        let unique: Vec<&str> = self
            .state
            .unique_attributes
            .iter()
            .filter(|(collection, _)| collection == collection_id)
            .map(|(_, attribute)| attribute.as_str())
            .collect();

        // The entry guard serializes writers on this collection, so the
        // checks and the insert are atomic.
        let mut docs = self
            .state
            .collections
            .entry(collection_id.to_string())
            .or_default();

        if docs.iter().any(|d| d["$id"] == document["$id"]) {
            return Err(AppError::conflict(
                "Document with the requested ID already exists",
            ));
        }
        for attribute in unique {
            let taken = document.get(attribute).is_some_and(|value| {
                docs.iter().any(|d| d.get(attribute) == Some(value))
            });
            if taken {
                return Err(AppError::conflict(format!(
                    "Document with the requested unique attribute '{attribute}' already exists"
                )));
            }
        }

        docs.push(document.clone());
        Ok(document)
    }
}

#[async_trait]
impl AccountService for MemoryClient {
    async fn create_email_token(&self, user_id: &str, email: &str) -> AppResult<EmailToken> {
        let email = email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(AppError::validation(format!("Invalid email: '{email}'")));
        }

        let existing = self
            .state
            .accounts
            .iter()
            .find(|a| a.email == email)
            .map(|a| a.id.clone());

        let account_id = match existing {
            Some(id) => id,
            None => {
                if !is_valid_id(user_id) {
                    return Err(AppError::validation(format!("Invalid user id: '{user_id}'")));
                }
                let account = Account {
                    id: user_id.to_string(),
                    name: String::new(),
                    email: email.clone(),
                };
                self.state.accounts.insert(account.id.clone(), account);
                user_id.to_string()
            }
        };

        let secret = passcode();
        let expire = Utc::now() + Duration::minutes(TOKEN_TTL_MINUTES);
        self.state.tokens.insert(
            account_id.clone(),
            PendingToken {
                secret: secret.clone(),
                expire,
            },
        );
        self.state.outbox.insert(email.clone(), secret.clone());

        tracing::debug!(%email, account_id = %account_id, passcode = %secret, "Passcode issued");

        Ok(EmailToken {
            id: unique_id(),
            user_id: account_id,
            secret: String::new(),
            expire,
        })
    }

    async fn create_session(&self, user_id: &str, secret: &str) -> AppResult<Session> {
        let now = Utc::now();
        let accepted = self
            .state
            .tokens
            .remove_if(user_id, |_, token| token.secret == secret && token.expire > now)
            .is_some();

        if !accepted {
            return Err(AppError::authentication(
                "Invalid token passed in the request",
            ));
        }

        let session = Session {
            id: unique_id(),
            user_id: user_id.to_string(),
            secret: format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple()),
            expire: now + Duration::days(SESSION_TTL_DAYS),
        };
        self.state
            .sessions
            .insert(session.secret.clone(), session.clone());

        Ok(session)
    }

    async fn get(&self) -> AppResult<Account> {
        let session = self.current_session()?;
        self.state
            .accounts
            .get(&session.user_id)
            .map(|a| a.value().clone())
            .ok_or_else(|| AppError::not_found("Account not found"))
    }

    async fn delete_session(&self, session_id: &str) -> AppResult<()> {
        let current = self.current_session()?;

        if session_id == "current" || session_id == current.id {
            self.state.sessions.remove(&current.secret);
            return Ok(());
        }

        let target = self
            .state
            .sessions
            .iter()
            .find(|s| s.id == session_id && s.user_id == current.user_id)
            .map(|s| s.key().clone())
            .ok_or_else(|| AppError::not_found("Session not found"))?;
        self.state.sessions.remove(&target);
        Ok(())
    }
}

#[async_trait]
impl FileStorage for MemoryClient {
    async fn create_file(
        &self,
        bucket_id: &str,
        file_id: &str,
        file_name: &str,
        data: Bytes,
    ) -> AppResult<StoredFile> {
        if !is_valid_id(file_id) {
            return Err(AppError::validation(format!("Invalid file id: '{file_id}'")));
        }

        let key = object_key(bucket_id, file_id);
        if self.state.objects.contains_key(&key) {
            return Err(AppError::conflict("A file with the requested ID already exists"));
        }

        let size = data.len() as u64;
        self.state.objects.insert(
            key,
            StoredObject {
                name: file_name.to_string(),
                data,
            },
        );

        Ok(StoredFile {
            id: file_id.to_string(),
            name: file_name.to_string(),
            size_original: size,
            mime_type: "application/octet-stream".to_string(),
        })
    }

    async fn delete_file(&self, bucket_id: &str, file_id: &str) -> AppResult<()> {
        self.state
            .objects
            .remove(&object_key(bucket_id, file_id))
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("File not found"))
    }

    fn file_view_url(&self, bucket_id: &str, file_id: &str) -> String {
        format!("/memory/buckets/{bucket_id}/files/{file_id}/view")
    }
}
