//! # storeit-service
//!
//! Business logic service layer for StoreIt. Each service orchestrates
//! backend handles obtained from a [`storeit_backend::BackendFactory`] to
//! implement one application-level use case.
//!
//! Services follow constructor injection: the factory and the collection
//! identifiers they need are provided at construction time.

pub mod auth;
pub mod context;
pub mod file;
pub mod user;

pub use auth::{AccountProvisioner, OtpIssuer, SessionCookie, SessionVerifier, VerifiedSession};
pub use context::SessionContext;
pub use file::{FileService, UploadParams, UploadService};
pub use user::{UserDirectory, UserService};
