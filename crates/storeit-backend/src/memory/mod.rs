//! Process-local backend for development and tests.
//!
//! Mirrors the observable behavior of the hosted service closely enough to
//! run every StoreIt flow without network access: collections with unique
//! attributes, email passcodes (kept in an outbox instead of being mailed),
//! secret-bearing sessions, and bucket objects.

mod client;
mod query;

use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde_json::Value;

use storeit_core::config::BackendConfig;
use storeit_entity::account::{Account, Session};

use self::client::MemoryClient;
use crate::factory::{BackendFactory, BackendHandle, Credential};

/// How long an emailed passcode stays valid.
const TOKEN_TTL_MINUTES: i64 = 15;
/// How long a session stays valid.
const SESSION_TTL_DAYS: i64 = 365;

/// A passcode waiting to be exchanged for a session.
#[derive(Debug, Clone)]
struct PendingToken {
    secret: String,
    expire: DateTime<Utc>,
}

/// A stored bucket object.
#[derive(Debug, Clone)]
struct StoredObject {
    name: String,
    data: Bytes,
}

/// Shared state behind every memory handle.
#[derive(Debug, Default)]
struct MemoryState {
    /// Documents per collection, in insertion order.
    collections: DashMap<String, Vec<Value>>,
    /// `(collection, attribute)` pairs that must be unique.
    unique_attributes: Vec<(String, String)>,
    /// Accounts by id.
    accounts: DashMap<String, Account>,
    /// Outstanding passcodes by account id.
    tokens: DashMap<String, PendingToken>,
    /// Sessions by secret.
    sessions: DashMap<String, Session>,
    /// Objects by `bucket/file` key.
    objects: DashMap<String, StoredObject>,
    /// Last passcode sent to each email.
    outbox: DashMap<String, String>,
}

/// In-memory backend factory.
///
/// Cloning shares the underlying state, so a test can keep one clone to
/// inspect what the application wrote through another.
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    state: Arc<MemoryState>,
}

impl MemoryBackend {
    /// Create an empty backend. The configured users collection gets a
    /// unique index on `email`.
    pub fn new(config: &BackendConfig) -> Self {
        let state = MemoryState {
            unique_attributes: vec![(config.users_collection_id.clone(), "email".to_string())],
            ..MemoryState::default()
        };
        Self {
            state: Arc::new(state),
        }
    }

    fn client(&self, credential: Credential) -> MemoryClient {
        MemoryClient::new(Arc::clone(&self.state), credential)
    }

    /// The last passcode emailed to `email`, as a mailbox would show it.
    pub fn last_passcode(&self, email: &str) -> Option<String> {
        self.state
            .outbox
            .get(&email.to_lowercase())
            .map(|entry| entry.value().clone())
    }

    /// Snapshot of every document in a collection.
    pub fn documents(&self, collection_id: &str) -> Vec<Value> {
        self.state
            .collections
            .get(collection_id)
            .map(|docs| docs.value().clone())
            .unwrap_or_default()
    }

    /// Insert a document directly, bypassing uniqueness checks.
    pub fn seed_document(&self, collection_id: &str, document: Value) {
        self.state
            .collections
            .entry(collection_id.to_string())
            .or_default()
            .push(document);
    }

    /// Name and bytes of a stored object.
    pub fn object(&self, bucket_id: &str, file_id: &str) -> Option<(String, Bytes)> {
        self.state
            .objects
            .get(&object_key(bucket_id, file_id))
            .map(|o| (o.name.clone(), o.data.clone()))
    }

    /// Number of stored objects across all buckets.
    pub fn object_count(&self) -> usize {
        self.state.objects.len()
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.state.sessions.len()
    }
}

impl BackendFactory for MemoryBackend {
    fn admin(&self) -> BackendHandle {
        BackendHandle::from_client(self.client(Credential::ApiKey("memory".to_string())))
    }

    fn session(&self, secret: &str) -> BackendHandle {
        BackendHandle::from_client(self.client(Credential::Session(secret.to_string())))
    }
}

fn object_key(bucket_id: &str, file_id: &str) -> String {
    format!("{bucket_id}/{file_id}")
}

#[cfg(test)]
mod tests;
