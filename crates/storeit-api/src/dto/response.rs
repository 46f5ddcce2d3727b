//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storeit_entity::file::File;
use storeit_entity::user::User;

/// Standard API success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Account id the passcode must be verified against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountIdResponse {
    /// Backend account identifier.
    pub account_id: String,
}

/// Result of a passcode verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    /// Session identifier.
    pub session_id: String,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text.
    pub message: String,
}

/// User info in responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User document id.
    pub id: String,
    /// Display name.
    pub full_name: String,
    /// Email.
    pub email: String,
    /// Avatar image.
    pub avatar: String,
    /// Backend account id.
    pub account_id: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            avatar: user.avatar,
            account_id: user.account_id,
        }
    }
}

/// File info in responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResponse {
    /// File document id.
    pub id: String,
    /// File name.
    pub name: String,
    /// View URL.
    pub url: String,
    /// File category.
    #[serde(rename = "type")]
    pub file_type: String,
    /// Extension without the dot.
    pub extension: String,
    /// Size in bytes.
    pub size: u64,
    /// Owning user's document id.
    pub owner: String,
    /// Emails the file is shared with.
    pub users: Vec<String>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
}

impl From<File> for FileResponse {
    fn from(file: File) -> Self {
        Self {
            id: file.id,
            name: file.name,
            url: file.url,
            file_type: file.file_type.to_string(),
            extension: file.extension,
            size: file.size,
            owner: file.owner,
            users: file.users,
            created_at: file.created_at,
        }
    }
}

/// A listing of files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileListResponse {
    /// Number of matching files.
    pub total: u64,
    /// The files.
    pub documents: Vec<FileResponse>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
