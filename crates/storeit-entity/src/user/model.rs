//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::avatar::DEFAULT_AVATAR;

/// A user record in the users collection.
///
/// One record exists per email address. The record links the person to the
/// backend account that receives their one-time passcodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Document identifier.
    #[serde(rename = "$id")]
    pub id: String,
    /// Display name entered at sign-up.
    pub full_name: String,
    /// Email address, unique across the collection.
    pub email: String,
    /// Avatar image, usually a data URL.
    pub avatar: String,
    /// The backend account this user signs in with.
    pub account_id: String,
    /// When the document was created.
    #[serde(rename = "$createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Data required to create a new user document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    /// Display name.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Avatar image.
    pub avatar: String,
    /// Backend account identifier returned by OTP issuance.
    pub account_id: String,
}

impl CreateUser {
    /// A new user with the default avatar.
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            avatar: DEFAULT_AVATAR.to_string(),
            account_id: account_id.into(),
        }
    }
}
