//! Passcode verification and session lifecycle.

use std::fmt;
use std::sync::Arc;

use tracing::{error, info};

use storeit_backend::BackendFactory;
use storeit_core::config::SessionConfig;
use storeit_core::error::AppError;

use crate::context::SessionContext;

/// The session cookie to hand to the browser.
///
/// Always `HttpOnly`, `Secure`, `SameSite=Strict` and scoped to `/`.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCookie {
    /// Cookie name.
    pub name: String,
    /// Session secret.
    pub value: String,
    /// Cookie path.
    pub path: &'static str,
}

impl fmt::Debug for SessionCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCookie")
            .field("name", &self.name)
            .field("value", &"***")
            .field("path", &self.path)
            .finish()
    }
}

/// A session created from a verified passcode.
#[derive(Debug, Clone)]
pub struct VerifiedSession {
    /// Session identifier.
    pub session_id: String,
    /// Cookie carrying the session secret.
    pub cookie: SessionCookie,
}

/// Exchanges passcodes for sessions and ends them.
#[derive(Debug, Clone)]
pub struct SessionVerifier {
    /// Backend client factory.
    factory: Arc<dyn BackendFactory>,
    /// Cookie settings.
    config: SessionConfig,
}

impl SessionVerifier {
    /// Creates a new verifier.
    pub fn new(factory: Arc<dyn BackendFactory>, config: SessionConfig) -> Self {
        Self { factory, config }
    }

    /// Verifies `password` for `account_id` and opens a session.
    pub async fn verify_secret(
        &self,
        account_id: &str,
        password: &str,
    ) -> Result<VerifiedSession, AppError> {
        let session = self
            .factory
            .admin()
            .account
            .create_session(account_id, password)
            .await
            .inspect_err(|e| error!(%account_id, error = %e, "Failed to verify OTP"))?;

        info!(%account_id, session_id = %session.id, "Session created");

        Ok(VerifiedSession {
            session_id: session.id,
            cookie: SessionCookie {
                name: self.config.cookie_name.clone(),
                value: session.secret,
                path: "/",
            },
        })
    }

    /// Ends the caller's session.
    pub async fn sign_out(&self, ctx: &SessionContext) -> Result<(), AppError> {
        self.factory
            .session(ctx.secret())
            .account
            .delete_session("current")
            .await?;
        info!(
            ip = ?ctx.ip_address,
            user_agent = ?ctx.user_agent,
            "Session deleted"
        );
        Ok(())
    }

    /// Name of the session cookie.
    pub fn cookie_name(&self) -> &str {
        &self.config.cookie_name
    }
}
