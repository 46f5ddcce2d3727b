//! Bucket storage endpoints.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};

use storeit_core::error::{AppError, ErrorKind};
use storeit_core::result::AppResult;
use storeit_entity::file::StoredFile;

use super::RestClient;
use crate::traits::FileStorage;

#[async_trait]
impl FileStorage for RestClient {
    async fn create_file(
        &self,
        bucket_id: &str,
        file_id: &str,
        file_name: &str,
        data: Bytes,
    ) -> AppResult<StoredFile> {
        let url = self.url(&format!("/storage/buckets/{bucket_id}/files"))?;

        let part = Part::bytes(data.to_vec())
            .file_name(file_name.to_string())
            .mime_str("application/octet-stream")
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Invalid upload content type", e)
            })?;
        let form = Form::new()
            .text("fileId", file_id.to_string())
            .part("file", part);

        self.send_json(self.post_request(url).multipart(form), "Create file")
            .await
    }

    async fn delete_file(&self, bucket_id: &str, file_id: &str) -> AppResult<()> {
        let url = self.url(&format!("/storage/buckets/{bucket_id}/files/{file_id}"))?;
        self.send_empty(self.delete_request(url), "Delete file").await
    }

    fn file_view_url(&self, bucket_id: &str, file_id: &str) -> String {
        format!(
            "{}/storage/buckets/{bucket_id}/files/{file_id}/view?project={}",
            self.settings.endpoint, self.settings.project_id
        )
    }
}
