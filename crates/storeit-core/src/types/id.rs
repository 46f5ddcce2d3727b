//! Document and request identifiers.
//!
//! The backend accepts caller-chosen ids of up to 36 characters drawn from
//! `[a-zA-Z0-9._-]`. A UUIDv7 in its 32-character simple form satisfies that
//! and sorts by creation time.

use uuid::Uuid;

/// Generate a fresh, time-ordered unique identifier.
pub fn unique_id() -> String {
    Uuid::now_v7().simple().to_string()
}

/// Whether `id` is acceptable as a caller-chosen backend identifier.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= 36
        && !id.starts_with(['.', '-', '_'])
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
}
