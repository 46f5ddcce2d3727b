//! Account, email token, and session models.
//!
//! These are owned by the backend's account service. StoreIt never persists
//! them itself; the session secret only lives in the client's cookie.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A backend account as seen through a session-scoped handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Account identifier.
    #[serde(rename = "$id")]
    pub id: String,
    /// Account display name (may be empty).
    #[serde(default)]
    pub name: String,
    /// Account email.
    #[serde(default)]
    pub email: String,
}

/// A pending one-time passcode issued to an email address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailToken {
    /// Token identifier.
    #[serde(rename = "$id")]
    pub id: String,
    /// The account identifier the passcode belongs to.
    pub user_id: String,
    /// The passcode. Empty when returned to clients; delivered by email.
    #[serde(default)]
    pub secret: String,
    /// When the passcode stops being accepted.
    pub expire: DateTime<Utc>,
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Session identifier.
    #[serde(rename = "$id")]
    pub id: String,
    /// The account the session belongs to.
    pub user_id: String,
    /// Bearer secret. Only populated when the session is created server-side.
    #[serde(default)]
    pub secret: String,
    /// When the session expires.
    pub expire: DateTime<Utc>,
}

impl Session {
    /// Whether the session is past its expiry.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expire
    }
}
