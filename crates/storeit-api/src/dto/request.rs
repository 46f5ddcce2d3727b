//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use storeit_core::error::AppError;
use storeit_service::auth::NewAccount;

/// Sign-up request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    /// Display name.
    #[validate(length(min = 2, max = 50, message = "Full name must be 2 to 50 characters"))]
    pub full_name: String,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

impl From<SignUpRequest> for NewAccount {
    fn from(req: SignUpRequest) -> Self {
        Self {
            full_name: req.full_name,
            email: req.email,
        }
    }
}

/// Sign-in request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

/// Passcode verification request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    /// Account the passcode was sent for.
    #[validate(length(min = 1, message = "accountId is required"))]
    pub account_id: String,
    /// The emailed passcode.
    #[validate(length(min = 1, message = "Passcode is required"))]
    pub password: String,
}

/// Query string of the file list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListFilesQuery {
    /// Sort key such as `name-asc`.
    pub sort: Option<String>,
}

/// Run the `validator` rules and turn failures into a validation error.
pub fn validated<T: Validate>(req: T) -> Result<T, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    Ok(req)
}
