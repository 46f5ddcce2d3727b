//! Backend client factory: admin and session-scoped handles.

use std::fmt;
use std::sync::Arc;

use storeit_core::config::{BackendConfig, BackendProvider};
use storeit_core::result::AppResult;

use crate::memory::MemoryBackend;
use crate::rest::RestBackend;
use crate::traits::{AccountService, DocumentStore, FileStorage};

/// What a handle authenticates with.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Server API key; full privileges.
    ApiKey(String),
    /// End-user session secret from the session cookie.
    Session(String),
}

impl Credential {
    /// The session secret, if this is a session credential.
    pub fn session_secret(&self) -> Option<&str> {
        match self {
            Self::Session(secret) => Some(secret),
            Self::ApiKey(_) => None,
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey(_) => write!(f, "ApiKey(***)"),
            Self::Session(_) => write!(f, "Session(***)"),
        }
    }
}

/// The three backend services behind one credential.
#[derive(Debug, Clone)]
pub struct BackendHandle {
    /// Document database.
    pub databases: Arc<dyn DocumentStore>,
    /// Account and session service.
    pub account: Arc<dyn AccountService>,
    /// Bucket storage.
    pub storage: Arc<dyn FileStorage>,
}

impl BackendHandle {
    /// Build a handle from one client implementing all three services.
    pub fn from_client<C>(client: C) -> Self
    where
        C: DocumentStore + AccountService + FileStorage,
    {
        let client = Arc::new(client);
        Self {
            databases: client.clone(),
            account: client.clone(),
            storage: client,
        }
    }
}

/// Produces handles to the backend.
///
/// Holds configuration only; every handle is independent and cheap to make.
pub trait BackendFactory: Send + Sync + fmt::Debug + 'static {
    /// A handle using the server API key.
    fn admin(&self) -> BackendHandle;

    /// A handle scoped to an end-user session secret.
    fn session(&self, secret: &str) -> BackendHandle;
}

/// Build the factory selected by `config.provider`.
pub fn build_factory(config: &BackendConfig) -> AppResult<Arc<dyn BackendFactory>> {
    tracing::info!(provider = %config.provider, "Initializing backend client factory");

    let factory: Arc<dyn BackendFactory> = match config.provider {
        BackendProvider::Rest => Arc::new(RestBackend::new(config)?),
        BackendProvider::Memory => Arc::new(MemoryBackend::new(config)),
    };
    Ok(factory)
}
