//! Hosted backend (document database, accounts, bucket storage) settings.

use serde::{Deserialize, Serialize};

/// Which backend implementation the server talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendProvider {
    /// The hosted REST API.
    #[default]
    Rest,
    /// A process-local backend for development and tests.
    Memory,
}

impl std::fmt::Display for BackendProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rest => write!(f, "rest"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Connection settings for the hosted backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend implementation.
    #[serde(default)]
    pub provider: BackendProvider,
    /// Base URL of the REST API, including the version segment.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Project identifier sent with every request.
    #[serde(default)]
    pub project_id: String,
    /// Server API key used by the admin handle.
    #[serde(default)]
    pub api_key: String,
    /// Database holding the users and files collections.
    #[serde(default = "default_database_id")]
    pub database_id: String,
    /// Users collection identifier.
    #[serde(default = "default_users_collection")]
    pub users_collection_id: String,
    /// Files collection identifier.
    #[serde(default = "default_files_collection")]
    pub files_collection_id: String,
    /// Storage bucket identifier.
    #[serde(default = "default_bucket_id")]
    pub bucket_id: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            provider: BackendProvider::default(),
            endpoint: default_endpoint(),
            project_id: String::new(),
            api_key: String::new(),
            database_id: default_database_id(),
            users_collection_id: default_users_collection(),
            files_collection_id: default_files_collection(),
            bucket_id: default_bucket_id(),
            request_timeout_seconds: default_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    "https://cloud.appwrite.io/v1".to_string()
}

fn default_database_id() -> String {
    "storeit".to_string()
}

fn default_users_collection() -> String {
    "users".to_string()
}

fn default_files_collection() -> String {
    "files".to_string()
}

fn default_bucket_id() -> String {
    "files".to_string()
}

fn default_timeout() -> u64 {
    30
}
