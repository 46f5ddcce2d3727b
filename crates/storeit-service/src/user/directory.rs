//! Lookups and inserts against the users collection.

use std::sync::Arc;

use tracing::{debug, info};

use storeit_backend::{BackendFactory, DocumentStore};
use storeit_core::error::AppError;
use storeit_core::types::id::unique_id;
use storeit_core::types::Query;
use storeit_entity::user::{CreateUser, User};

use crate::context::SessionContext;

/// Reads and writes user documents.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    /// Backend client factory.
    factory: Arc<dyn BackendFactory>,
    /// Users collection identifier.
    collection_id: String,
}

impl UserDirectory {
    /// Creates a new user directory.
    pub fn new(factory: Arc<dyn BackendFactory>, collection_id: impl Into<String>) -> Self {
        Self {
            factory,
            collection_id: collection_id.into(),
        }
    }

    /// Finds the user registered under `email`.
    ///
    /// Returns `Ok(None)` when no document matches. The email is used as
    /// given.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let db = self.factory.admin().databases;
        self.find_first(db.as_ref(), Query::equal("email", [email]))
            .await
    }

    /// Finds the user linked to a backend account, reading through the
    /// caller's session.
    pub async fn find_user_by_account_id(
        &self,
        ctx: &SessionContext,
        account_id: &str,
    ) -> Result<Option<User>, AppError> {
        let db = self.factory.session(ctx.secret()).databases;
        self.find_first(db.as_ref(), Query::equal("accountId", [account_id]))
            .await
    }

    /// Inserts a new user document.
    ///
    /// Fails with `Conflict` when the email is already registered.
    pub async fn create_user(&self, user: CreateUser) -> Result<User, AppError> {
        let db = self.factory.admin().databases;
        let document_id = unique_id();
        let data = serde_json::to_value(&user)?;

        let document = db
            .create_document(&self.collection_id, &document_id, data)
            .await?;

        info!(user_id = %document_id, email = %user.email, "User document created");
        Ok(serde_json::from_value(document)?)
    }

    async fn find_first(
        &self,
        db: &dyn DocumentStore,
        filter: Query,
    ) -> Result<Option<User>, AppError> {
        let list = db.list_documents(&self.collection_id, &[filter]).await?;
        debug!(collection = %self.collection_id, total = list.total, "User lookup");

        if list.total == 0 {
            return Ok(None);
        }
        list.into_first()
            .map(serde_json::from_value::<User>)
            .transpose()
            .map_err(AppError::from)
    }
}
