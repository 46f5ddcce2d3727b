//! Listing the files a user can see.

use std::sync::Arc;

use tracing::debug;

use storeit_backend::BackendFactory;
use storeit_core::error::AppError;
use storeit_core::types::{DocumentList, Query, SortField};
use storeit_entity::file::File;

use crate::context::SessionContext;
use crate::user::UserService;

/// Attributes a listing may be ordered by.
const SORTABLE_FIELDS: &[&str] = &["$createdAt", "name", "size"];

/// Lists files owned by or shared with the caller.
#[derive(Debug, Clone)]
pub struct FileService {
    /// Backend client factory.
    factory: Arc<dyn BackendFactory>,
    /// Current-user resolution.
    users: UserService,
    /// Files collection identifier.
    collection_id: String,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(
        factory: Arc<dyn BackendFactory>,
        users: UserService,
        collection_id: impl Into<String>,
    ) -> Self {
        Self {
            factory,
            users,
            collection_id: collection_id.into(),
        }
    }

    /// The ordering for a sort key, falling back to newest first.
    pub fn resolve_sort(key: Option<&str>) -> SortField {
        key.and_then(SortField::parse_key)
            .filter(|sort| SORTABLE_FIELDS.contains(&sort.field.as_str()))
            .unwrap_or_else(|| SortField::desc("$createdAt"))
    }

    /// Lists the files the signed-in user owns or that are shared with
    /// their email.
    pub async fn list_files(
        &self,
        ctx: &SessionContext,
        sort: Option<&str>,
    ) -> Result<DocumentList<File>, AppError> {
        let user = self.users.get_current_user(ctx).await?;
        let sort = Self::resolve_sort(sort);

        let queries = [
            Query::or([
                Query::equal("owner", [user.id.as_str()]),
                Query::contains("users", [user.email.as_str()]),
            ]),
            sort.to_query(),
        ];

        let list = self
            .factory
            .admin()
            .databases
            .list_documents(&self.collection_id, &queries)
            .await?;
        debug!(
            user_id = %user.id,
            sort = %sort.key(),
            total = list.total,
            elapsed_ms = ctx.elapsed_ms(),
            "Files listed"
        );

        Ok(list.parse::<File>()?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use storeit_backend::MemoryBackend;
    use storeit_core::types::SortDirection;

    use super::*;
    use crate::auth::{AccountProvisioner, NewAccount, OtpIssuer, SessionVerifier};
    use crate::user::UserDirectory;
    use crate::testing;

    fn file_doc(id: &str, name: &str, size: u64, owner: &str, users: &[&str], at: &str) -> serde_json::Value {
        json!({
            "$id": id,
            "$createdAt": at,
            "name": name,
            "url": format!("/view/{id}"),
            "type": "other",
            "extension": "",
            "size": size,
            "owner": owner,
            "accountId": "acc",
            "users": users,
            "bucketFileId": id
        })
    }

    /// Signs up and verifies `email`, returning its session and user id.
    async fn signed_in(
        memory: &MemoryBackend,
        factory: Arc<dyn BackendFactory>,
        directory: &UserDirectory,
        email: &str,
    ) -> (SessionContext, String) {
        let provisioner = AccountProvisioner::new(directory.clone(), OtpIssuer::new(factory.clone()));
        let account = provisioner
            .create_account(NewAccount {
                full_name: "Someone".into(),
                email: email.into(),
            })
            .await
            .unwrap();
        let code = memory.last_passcode(email).unwrap();
        let verified = SessionVerifier::new(factory, Default::default())
            .verify_secret(&account.account_id, &code)
            .await
            .unwrap();
        let user = directory.find_user_by_email(email).await.unwrap().unwrap();
        (SessionContext::new(verified.cookie.value), user.id)
    }

    #[test]
    fn test_resolve_sort() {
        assert_eq!(FileService::resolve_sort(None), SortField::desc("$createdAt"));
        assert_eq!(
            FileService::resolve_sort(Some("size-asc")),
            SortField::new("size", SortDirection::Asc)
        );
        assert_eq!(
            FileService::resolve_sort(Some("accountId-asc")),
            SortField::desc("$createdAt")
        );
        assert_eq!(
            FileService::resolve_sort(Some("garbage")),
            SortField::desc("$createdAt")
        );
    }

    #[tokio::test]
    async fn test_lists_owned_and_shared_files() {
        let (memory, factory, config) = testing::backend();
        let directory = UserDirectory::new(factory.clone(), config.users_collection_id.clone());
        let (ctx, user_id) = signed_in(&memory, factory.clone(), &directory, "ann@x.com").await;

        memory.seed_document("files", file_doc("f1", "mine.txt", 5, &user_id, &[], "2024-01-01T00:00:00.000Z"));
        memory.seed_document("files", file_doc("f2", "shared.txt", 9, "other", &["ann@x.com"], "2024-01-02T00:00:00.000Z"));
        memory.seed_document("files", file_doc("f3", "private.txt", 1, "other", &[], "2024-01-03T00:00:00.000Z"));

        let service = FileService::new(
            factory.clone(),
            UserService::new(factory, directory),
            config.files_collection_id,
        );

        let newest_first = service.list_files(&ctx, None).await.unwrap();
        assert_eq!(newest_first.total, 2);
        let ids: Vec<_> = newest_first.documents.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["f2", "f1"]);

        let by_size = service.list_files(&ctx, Some("size-asc")).await.unwrap();
        let ids: Vec<_> = by_size.documents.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["f1", "f2"]);
    }

    #[tokio::test]
    async fn test_no_files_is_empty_list() {
        let (memory, factory, config) = testing::backend();
        let directory = UserDirectory::new(factory.clone(), config.users_collection_id.clone());
        let (ctx, _) = signed_in(&memory, factory.clone(), &directory, "ann@x.com").await;

        let service = FileService::new(
            factory.clone(),
            UserService::new(factory, directory),
            config.files_collection_id,
        );
        let list = service.list_files(&ctx, None).await.unwrap();
        assert_eq!(list.total, 0);
        assert!(list.is_empty());
    }
}
