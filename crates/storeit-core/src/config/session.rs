//! Session cookie configuration.

use serde::{Deserialize, Serialize};

/// Settings for the cookie that carries the backend session secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Cookie name.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Where unauthenticated page requests are redirected.
    #[serde(default = "default_sign_in_path")]
    pub sign_in_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            sign_in_path: default_sign_in_path(),
        }
    }
}

fn default_cookie_name() -> String {
    "appwrite-session".to_string()
}

fn default_sign_in_path() -> String {
    "/sign-in".to_string()
}
