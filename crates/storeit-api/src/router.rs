//! Route definitions for the StoreIt HTTP server.
//!
//! JSON endpoints are mounted under `/api`; the pages live at the root.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{Router, middleware as axum_middleware};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the router with all routes, threading `AppState` through every
/// handler.
pub fn build_router(state: AppState) -> Router {
    let max_upload = usize::try_from(state.config.storage.max_upload_size_bytes)
        .unwrap_or(usize::MAX);

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(file_routes())
        .route("/health", get(handlers::health::health));

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes())
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Sign-up, sign-in, passcode verification, sign-out, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/sign-up", post(handlers::auth::sign_up))
        .route("/auth/sign-in", post(handlers::auth::sign_in))
        .route("/auth/verify", post(handlers::auth::verify))
        .route("/auth/sign-out", post(handlers::auth::sign_out))
        .route("/auth/me", get(handlers::auth::me))
}

/// File list and upload
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files", get(handlers::file::list_files))
        .route("/files/upload", post(handlers::file::upload_file))
}

/// Server-rendered pages
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/sign-in", get(handlers::pages::sign_in_page))
        .route("/sign-up", get(handlers::pages::sign_up_page))
        .route("/{file_type}", get(handlers::pages::files_by_type))
}
