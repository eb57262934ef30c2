use axum::{Json, extract::State};

use crate::middleware::upload_request::SingleUpload;
use crate::types::content::{UploadListResponse, UploadResponse};
use crate::{CmsError, router::CmsState};

/// POST /api/upload -> stores the `image` file and returns its URL.
pub async fn upload_file(
    State(state): State<CmsState>,
    upload: SingleUpload,
) -> Result<Json<UploadResponse>, CmsError> {
    let url = state
        .uploads
        .save(upload.original_name.as_deref(), &upload.bytes)
        .await?;
    Ok(Json(UploadResponse {
        success: true,
        imageUrl: url,
    }))
}

/// GET /api/uploads -> raw names of everything in the upload directory.
pub async fn list_uploads(
    State(state): State<CmsState>,
) -> Result<Json<UploadListResponse>, CmsError> {
    let files = state.uploads.list().await?;
    Ok(Json(UploadListResponse {
        success: true,
        files,
    }))
}
