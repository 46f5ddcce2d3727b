//! Current-user resolution for signed-in requests.

use std::sync::Arc;

use tracing::debug;

use storeit_backend::BackendFactory;
use storeit_core::error::AppError;
use storeit_entity::user::User;

use super::directory::UserDirectory;
use crate::context::SessionContext;

/// Resolves the user behind a session.
#[derive(Debug, Clone)]
pub struct UserService {
    /// Backend client factory.
    factory: Arc<dyn BackendFactory>,
    /// User directory.
    directory: UserDirectory,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(factory: Arc<dyn BackendFactory>, directory: UserDirectory) -> Self {
        Self { factory, directory }
    }

    /// Gets the signed-in user's record.
    ///
    /// Fails with `Authentication` when the session is invalid and with
    /// `NotFound` when the account has no user document.
    pub async fn get_current_user(&self, ctx: &SessionContext) -> Result<User, AppError> {
        let account = self.factory.session(ctx.secret()).account.get().await?;
        debug!(account_id = %account.id, "Session resolved to account");

        self.directory
            .find_user_by_account_id(ctx, &account.id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
