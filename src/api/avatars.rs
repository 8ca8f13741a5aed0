use crate::api::AppState;
use crate::api::schemas::UploadUrlResponse;
use crate::error::{AppError, Result};
use axum::{Json, extract::State};

/// Issues a presigned URL for uploading an avatar.
///
/// # Errors
/// Returns `AppError::NotFound` when no uploads bucket is configured.
pub async fn key_upload(State(state): State<AppState>) -> Result<Json<UploadUrlResponse>> {
    let avatars = state.avatars.as_ref().ok_or(AppError::NotFound)?;
    let url = avatars.presigned_upload_url().await?;
    Ok(Json(UploadUrlResponse { url }))
}
