//! Passwordless authentication: passcode issuance, account provisioning,
//! and session verification.

pub mod otp;
pub mod provisioner;
pub mod verifier;

pub use otp::OtpIssuer;
pub use provisioner::{AccountProvisioner, NewAccount, ProvisionedAccount};
pub use verifier::{SessionCookie, SessionVerifier, VerifiedSession};
