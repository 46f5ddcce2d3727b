//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use storeit_backend::BackendFactory;
use storeit_core::config::AppConfig;
use storeit_service::{
    AccountProvisioner, FileService, OtpIssuer, SessionVerifier, UploadService, UserDirectory,
    UserService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Backend client factory
    pub backend: Arc<dyn BackendFactory>,
    /// Sign-up and sign-in
    pub provisioner: Arc<AccountProvisioner>,
    /// Passcode verification and sign-out
    pub verifier: Arc<SessionVerifier>,
    /// Current-user resolution
    pub user_service: Arc<UserService>,
    /// File listing
    pub file_service: Arc<FileService>,
    /// File upload
    pub upload_service: Arc<UploadService>,
}

impl AppState {
    /// Wires every service onto one backend factory.
    pub fn new(config: AppConfig, backend: Arc<dyn BackendFactory>) -> Self {
        let directory =
            UserDirectory::new(Arc::clone(&backend), config.backend.users_collection_id.clone());
        let otp = OtpIssuer::new(Arc::clone(&backend));
        let user_service = UserService::new(Arc::clone(&backend), directory.clone());

        let provisioner = AccountProvisioner::new(directory, otp);
        let verifier = SessionVerifier::new(Arc::clone(&backend), config.session.clone());
        let file_service = FileService::new(
            Arc::clone(&backend),
            user_service.clone(),
            config.backend.files_collection_id.clone(),
        );
        let upload_service =
            UploadService::new(Arc::clone(&backend), &config.backend, &config.storage);

        Self {
            config: Arc::new(config),
            backend,
            provisioner: Arc::new(provisioner),
            verifier: Arc::new(verifier),
            user_service: Arc::new(user_service),
            file_service: Arc::new(file_service),
            upload_service: Arc::new(upload_service),
        }
    }
}
