//! Storing uploaded bytes and recording them as file documents.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};

use storeit_backend::BackendFactory;
use storeit_core::config::{BackendConfig, StorageConfig};
use storeit_core::error::AppError;
use storeit_core::types::id::unique_id;
use storeit_entity::file::{CreateFile, File, FileType};

/// Handles file uploads.
#[derive(Debug, Clone)]
pub struct UploadService {
    /// Backend client factory.
    factory: Arc<dyn BackendFactory>,
    /// Files collection identifier.
    collection_id: String,
    /// Bucket receiving the bytes.
    bucket_id: String,
    /// Upload size limit.
    max_upload_size_bytes: u64,
}

/// Parameters for a single-request upload.
#[derive(Debug, Clone)]
pub struct UploadParams {
    /// Original file name.
    pub file_name: String,
    /// File content bytes.
    pub data: Bytes,
    /// Owning user's document id.
    pub owner_id: String,
    /// Owner's backend account.
    pub account_id: String,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(
        factory: Arc<dyn BackendFactory>,
        backend: &BackendConfig,
        storage: &StorageConfig,
    ) -> Self {
        Self {
            factory,
            collection_id: backend.files_collection_id.clone(),
            bucket_id: backend.bucket_id.clone(),
            max_upload_size_bytes: storage.max_upload_size_bytes,
        }
    }

    /// Stores the bytes in the bucket and creates the file document.
    ///
    /// If the document cannot be created, the stored object is deleted
    /// before the error is returned.
    pub async fn upload_file(&self, params: UploadParams) -> Result<File, AppError> {
        if params.file_name.trim().is_empty() {
            return Err(AppError::validation("File name is required"));
        }
        if params.data.len() as u64 > self.max_upload_size_bytes {
            return Err(AppError::payload_too_large(format!(
                "File exceeds maximum upload size of {} bytes",
                self.max_upload_size_bytes
            )));
        }

        let handle = self.factory.admin();

        let stored = handle
            .storage
            .create_file(&self.bucket_id, &unique_id(), &params.file_name, params.data)
            .await?;

        let extension = File::extension_of(&stored.name).unwrap_or_default();
        let record = CreateFile {
            name: stored.name.clone(),
            url: handle.storage.file_view_url(&self.bucket_id, &stored.id),
            file_type: FileType::from_extension(&extension),
            extension,
            size: stored.size_original,
            owner: params.owner_id,
            account_id: params.account_id,
            users: Vec::new(),
            bucket_file_id: stored.id.clone(),
        };

        let created = match serde_json::to_value(&record) {
            Ok(data) => {
                handle
                    .databases
                    .create_document(&self.collection_id, &unique_id(), data)
                    .await
            }
            Err(e) => Err(e.into()),
        };

        let document = match created {
            Ok(document) => document,
            Err(e) => {
                let cleanup = handle.storage.delete_file(&self.bucket_id, &stored.id).await;
                if let Err(cleanup) = cleanup {
                    warn!(
                        bucket_file_id = %stored.id,
                        error = %cleanup,
                        "Failed to remove orphaned upload"
                    );
                }
                return Err(e);
            }
        };

        let file: File = serde_json::from_value(document)?;
        info!(
            file_id = %file.id,
            owner = %file.owner,
            name = %file.name,
            size = file.size,
            "Upload completed"
        );
        Ok(file)
    }
}
