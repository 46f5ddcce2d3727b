//! Email passcode issuance.

use std::sync::Arc;

use tracing::{error, info};

use storeit_backend::BackendFactory;
use storeit_core::error::AppError;
use storeit_core::types::id::unique_id;

/// Asks the account service to email one-time passcodes.
#[derive(Debug, Clone)]
pub struct OtpIssuer {
    /// Backend client factory.
    factory: Arc<dyn BackendFactory>,
}

impl OtpIssuer {
    /// Creates a new issuer.
    pub fn new(factory: Arc<dyn BackendFactory>) -> Self {
        Self { factory }
    }

    /// Emails a passcode to `email` and returns the account identifier the
    /// passcode must be verified against.
    ///
    /// The returned identifier is never empty.
    pub async fn send_email_otp(&self, email: &str) -> Result<String, AppError> {
        let account = self.factory.admin().account;

        let token = account
            .create_email_token(&unique_id(), email)
            .await
            .inspect_err(|e| error!(%email, error = %e, "Failed to send email OTP"))?;

        if token.user_id.is_empty() {
            let err = AppError::external("Account service returned an empty user id");
            error!(%email, error = %err, "Failed to send email OTP");
            return Err(err);
        }

        info!(%email, account_id = %token.user_id, "Email OTP sent");
        Ok(token.user_id)
    }
}
