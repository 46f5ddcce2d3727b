//! Account provisioning for sign-up and sign-in.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use storeit_core::error::{AppError, ErrorKind};
use storeit_entity::user::CreateUser;

use super::otp::OtpIssuer;
use crate::user::UserDirectory;

/// Sign-up input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    /// Display name.
    pub full_name: String,
    /// Email address that receives the passcode.
    pub email: String,
}

/// Outcome of provisioning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedAccount {
    /// Account the emailed passcode must be verified against.
    pub account_id: String,
    /// Whether a user document already existed for the email.
    pub existing: bool,
}

/// Creates user records and sends the passcodes that activate them.
#[derive(Debug, Clone)]
pub struct AccountProvisioner {
    /// User directory.
    directory: UserDirectory,
    /// Passcode issuer.
    otp: OtpIssuer,
}

impl AccountProvisioner {
    /// Creates a new provisioner.
    pub fn new(directory: UserDirectory, otp: OtpIssuer) -> Self {
        Self { directory, otp }
    }

    /// Registers `input.email` (if new) and emails it a passcode.
    ///
    /// A passcode is sent whether or not the email is already registered,
    /// so signing up again works as a sign-in.
    pub async fn create_account(&self, input: NewAccount) -> Result<ProvisionedAccount, AppError> {
        let existing_user = self.directory.find_user_by_email(&input.email).await?;

        let account_id = self.otp.send_email_otp(&input.email).await?;
        if account_id.is_empty() {
            return Err(AppError::internal("Failed to send an OTP."));
        }

        if existing_user.is_some() {
            info!(email = %input.email, %account_id, "Sign-up for existing user");
            return Ok(ProvisionedAccount {
                account_id,
                existing: true,
            });
        }

        let user = CreateUser::new(input.full_name, input.email.clone(), account_id.clone());
        match self.directory.create_user(user).await {
            Ok(_) => Ok(ProvisionedAccount {
                account_id,
                existing: false,
            }),
            Err(e) if e.is(ErrorKind::Conflict) => {
                warn!(email = %input.email, "User created concurrently; keeping existing record");
                Ok(ProvisionedAccount {
                    account_id,
                    existing: true,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Emails a passcode to a registered user.
    ///
    /// Returns the stored user's account id, or `NotFound` when the email is
    /// not registered.
    pub async fn sign_in_user(&self, email: &str) -> Result<ProvisionedAccount, AppError> {
        let user = self
            .directory
            .find_user_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        self.otp.send_email_otp(email).await?;
        info!(%email, account_id = %user.account_id, "Sign-in passcode sent");

        Ok(ProvisionedAccount {
            account_id: user.account_id,
            existing: true,
        })
    }
}
