//! Auth handlers: sign-up, sign-in, passcode verification, sign-out, me.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use storeit_service::SessionCookie;

use crate::dto::request::{SignInRequest, SignUpRequest, VerifyRequest, validated};
use crate::dto::response::{
    AccountIdResponse, ApiResponse, MessageResponse, SessionResponse, UserResponse,
};
use crate::error::ApiError;
use crate::extractors::SessionUser;
use crate::state::AppState;

/// POST /api/auth/sign-up
pub async fn sign_up(
    State(state): State<AppState>,
    Json(req): Json<SignUpRequest>,
) -> Result<Json<ApiResponse<AccountIdResponse>>, ApiError> {
    let req = validated(req)?;
    let account = state.provisioner.create_account(req.into()).await?;

    Ok(Json(ApiResponse::ok(AccountIdResponse {
        account_id: account.account_id,
    })))
}

/// POST /api/auth/sign-in
pub async fn sign_in(
    State(state): State<AppState>,
    Json(req): Json<SignInRequest>,
) -> Result<Json<ApiResponse<AccountIdResponse>>, ApiError> {
    let req = validated(req)?;
    let account = state.provisioner.sign_in_user(&req.email).await?;

    Ok(Json(ApiResponse::ok(AccountIdResponse {
        account_id: account.account_id,
    })))
}

/// POST /api/auth/verify
///
/// Sets the session cookie on success.
pub async fn verify(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<VerifyRequest>,
) -> Result<(CookieJar, Json<ApiResponse<SessionResponse>>), ApiError> {
    let req = validated(req)?;
    let verified = state
        .verifier
        .verify_secret(&req.account_id, &req.password)
        .await?;

    let jar = jar.add(session_cookie(verified.cookie));
    Ok((
        jar,
        Json(ApiResponse::ok(SessionResponse {
            session_id: verified.session_id,
        })),
    ))
}

/// POST /api/auth/sign-out
pub async fn sign_out(
    State(state): State<AppState>,
    session: SessionUser,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<MessageResponse>>), ApiError> {
    state.verifier.sign_out(session.context()).await?;

    let removal = Cookie::build((state.verifier.cookie_name().to_string(), "")).path("/");
    Ok((
        jar.remove(removal),
        Json(ApiResponse::ok(MessageResponse {
            message: "Signed out".to_string(),
        })),
    ))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    session: SessionUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.get_current_user(session.context()).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

fn session_cookie(cookie: SessionCookie) -> Cookie<'static> {
    Cookie::build((cookie.name, cookie.value))
        .path(cookie.path)
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(true)
        .build()
}
