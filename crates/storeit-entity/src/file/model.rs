//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::kind::FileType;

/// A file document in the files collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// Document identifier.
    #[serde(rename = "$id")]
    pub id: String,
    /// The file name (including extension).
    pub name: String,
    /// Public view URL of the stored bytes.
    pub url: String,
    /// Broad file category.
    #[serde(rename = "type", default)]
    pub file_type: FileType,
    /// Lowercase extension without the dot.
    #[serde(default)]
    pub extension: String,
    /// File size in bytes.
    #[serde(default)]
    pub size: u64,
    /// Owning user's document id. The backend may expand this into the full
    /// user document; only the id is kept.
    #[serde(deserialize_with = "document_id")]
    pub owner: String,
    /// Backend account of the owner.
    pub account_id: String,
    /// Emails the file is shared with.
    #[serde(default)]
    pub users: Vec<String>,
    /// Identifier of the stored object in the bucket.
    pub bucket_file_id: String,
    /// When the document was created.
    #[serde(rename = "$createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the document was last updated.
    #[serde(rename = "$updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl File {
    /// Get the extension (lowercase) of a file name, if any.
    pub fn extension_of(name: &str) -> Option<String> {
        name.rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
            .map(|ext| ext.to_lowercase())
    }
}

/// Data required to create a new file document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFile {
    /// The file name.
    pub name: String,
    /// Public view URL.
    pub url: String,
    /// File category.
    #[serde(rename = "type")]
    pub file_type: FileType,
    /// Extension without the dot.
    pub extension: String,
    /// Size in bytes.
    pub size: u64,
    /// Owning user's document id.
    pub owner: String,
    /// Owner's backend account.
    pub account_id: String,
    /// Emails the file is shared with.
    pub users: Vec<String>,
    /// Bucket object identifier.
    pub bucket_file_id: String,
}

/// Metadata of an object stored in a bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    /// Object identifier.
    #[serde(rename = "$id")]
    pub id: String,
    /// Original file name.
    pub name: String,
    /// Size in bytes before compression/encryption.
    pub size_original: u64,
    /// Detected MIME type.
    #[serde(default)]
    pub mime_type: String,
}

/// Accept either a bare id or an expanded document carrying `$id`.
fn document_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Reference {
        Id(String),
        Document {
            #[serde(rename = "$id")]
            id: String,
        },
    }

    Ok(match Reference::deserialize(deserializer)? {
        Reference::Id(id) => id,
        Reference::Document { id } => id,
    })
}
