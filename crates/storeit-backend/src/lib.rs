//! # storeit-backend
//!
//! Clients for the hosted backend-as-a-service that owns StoreIt's data:
//! the document database, the account/session service, and bucket storage.
//!
//! Callers obtain a [`BackendHandle`] from a [`BackendFactory`], either
//! admin-privileged (server API key) or scoped to an end-user session
//! secret. Two factories exist: [`rest::RestBackend`] speaks the hosted
//! REST API, and [`memory::MemoryBackend`] keeps everything in process for
//! development and tests.

pub mod factory;
pub mod memory;
pub mod rest;
pub mod traits;

pub use factory::{BackendFactory, BackendHandle, Credential, build_factory};
pub use memory::MemoryBackend;
pub use rest::RestBackend;
pub use traits::{AccountService, DocumentStore, FileStorage};
