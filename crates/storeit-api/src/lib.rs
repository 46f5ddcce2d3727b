//! # storeit-api
//!
//! HTTP layer for StoreIt built on Axum.
//!
//! Provides the JSON endpoints for sign-up, passcode verification, sessions
//! and files, the server-rendered file listing page, middleware (CORS,
//! request logging), the session-cookie extractor, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
