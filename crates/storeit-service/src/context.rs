//! Request context carrying the caller's session secret.

use std::fmt;

use chrono::{DateTime, Utc};

/// Context for a request made with a session cookie.
///
/// Built by the HTTP layer from the session cookie and passed into service
/// methods that act on behalf of the signed-in user.
#[derive(Clone)]
pub struct SessionContext {
    /// The session secret read from the cookie.
    secret: String,
    /// IP address of the request origin.
    pub ip_address: Option<String>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl SessionContext {
    /// Creates a context for the given session secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ip_address: None,
            user_agent: None,
            request_time: Utc::now(),
        }
    }

    /// Attaches client details for logging.
    pub fn with_client(mut self, ip_address: Option<String>, user_agent: Option<String>) -> Self {
        self.ip_address = ip_address;
        self.user_agent = user_agent;
        self
    }

    /// The session secret.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Milliseconds since the request was received.
    pub fn elapsed_ms(&self) -> i64 {
        (Utc::now() - self.request_time).num_milliseconds()
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("secret", &"***")
            .field("ip_address", &self.ip_address)
            .field("user_agent", &self.user_agent)
            .field("request_time", &self.request_time)
            .finish()
    }
}
