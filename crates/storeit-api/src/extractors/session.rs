//! `SessionUser` extractor: reads the session cookie and builds a
//! [`SessionContext`].

use std::convert::Infallible;

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use storeit_core::error::AppError;
use storeit_service::SessionContext;

use crate::error::ApiError;
use crate::state::AppState;

/// The caller's session, taken from the session cookie.
///
/// Rejects with `401` when the cookie is missing or empty. Whether the
/// session is still valid is decided by the backend on first use.
#[derive(Debug, Clone)]
pub struct SessionUser(pub SessionContext);

impl SessionUser {
    /// Returns the inner `SessionContext`.
    pub fn context(&self) -> &SessionContext {
        &self.0
    }

    /// Builds a context from the cookie jar, if the session cookie is set.
    pub fn from_jar(jar: &CookieJar, cookie_name: &str, parts: &Parts) -> Option<Self> {
        let secret = jar
            .get(cookie_name)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty())?;

        let ip_address = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let user_agent = parts
            .headers
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        Some(Self(
            SessionContext::new(secret).with_client(ip_address, user_agent),
        ))
    }
}

impl std::ops::Deref for SessionUser {
    type Target = SessionContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        Self::from_jar(&jar, &state.config.session.cookie_name, parts)
            .ok_or_else(|| ApiError(AppError::authentication("Missing session cookie")))
    }
}

impl OptionalFromRequestParts<AppState> for SessionUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(Self::from_jar(&jar, &state.config.session.cookie_name, parts))
    }
}
