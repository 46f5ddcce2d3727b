//! Document database endpoints.

use async_trait::async_trait;
use serde_json::{Value, json};

use storeit_core::result::AppResult;
use storeit_core::types::{DocumentList, Query};

use super::RestClient;
use crate::traits::DocumentStore;

impl RestClient {
    fn documents_path(&self, collection_id: &str) -> String {
        format!(
            "/databases/{}/collections/{collection_id}/documents",
            self.settings.database_id
        )
    }
}

#[async_trait]
impl DocumentStore for RestClient {
    async fn list_documents(
        &self,
        collection_id: &str,
        queries: &[Query],
    ) -> AppResult<DocumentList<Value>> {
        let mut url = self.url(&self.documents_path(collection_id))?;
        {
            let mut pairs = url.query_pairs_mut();
            for query in queries {
                pairs.append_pair("queries[]", &query.to_string());
            }
        }

        self.send_json(self.get_request(url), "List documents").await
    }

    async fn create_document(
        &self,
        collection_id: &str,
        document_id: &str,
        data: Value,
    ) -> AppResult<Value> {
        let url = self.url(&self.documents_path(collection_id))?;
        let body = json!({ "documentId": document_id, "data": data });

        self.send_json(self.post_request(url).json(&body), "Create document")
            .await
    }
}
