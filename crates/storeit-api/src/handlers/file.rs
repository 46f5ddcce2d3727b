//! File handlers: list and upload.

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;

use storeit_core::error::AppError;
use storeit_service::UploadParams;

use crate::dto::request::ListFilesQuery;
use crate::dto::response::{ApiResponse, FileListResponse, FileResponse};
use crate::error::ApiError;
use crate::extractors::SessionUser;
use crate::state::AppState;

/// GET /api/files?sort=...
pub async fn list_files(
    State(state): State<AppState>,
    session: SessionUser,
    Query(query): Query<ListFilesQuery>,
) -> Result<Json<ApiResponse<FileListResponse>>, ApiError> {
    let list = state
        .file_service
        .list_files(session.context(), query.sort.as_deref())
        .await?;

    Ok(Json(ApiResponse::ok(FileListResponse {
        total: list.total,
        documents: list.documents.into_iter().map(FileResponse::from).collect(),
    })))
}

/// POST /api/files/upload (multipart, field `file`)
pub async fn upload_file(
    State(state): State<AppState>,
    session: SessionUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<FileResponse>>), ApiError> {
    let user = state.user_service.get_current_user(session.context()).await?;

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Multipart error", e))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field
            .file_name()
            .map(String::from)
            .ok_or_else(|| AppError::validation("Uploaded file has no name"))?;
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Read error", e))?;
        upload = Some((file_name, data));
    }

    let (file_name, data) = upload.ok_or_else(|| AppError::validation("No file provided"))?;

    let file = state
        .upload_service
        .upload_file(UploadParams {
            file_name,
            data,
            owner_id: user.id,
            account_id: user.account_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(file.into()))))
}

/// Body-limit rejections become 413; anything else is malformed input.
fn multipart_error(context: &str, err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large(format!("{context}: {}", err.body_text()))
    } else {
        AppError::validation(format!("{context}: {}", err.body_text()))
    }
}
