use axum::extract::multipart::MultipartError;
use axum::extract::rejection::PathRejection;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum CmsError {
    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("No file uploaded")]
    MissingFile,

    #[error("Unexpected field: {0}")]
    UnexpectedField(String),

    #[error("{}", .0.body_text())]
    InvalidPath(#[from] PathRejection),

    #[error("Malformed upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage operation timed out")]
    IoTimeout,

    #[error("Unable to scan upload directory: {0}")]
    UploadDirUnreadable(std::io::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),
}

impl CmsError {
    /// Map a write failure on the users table, turning UNIQUE violations into
    /// `DuplicateUsername`.
    pub fn from_user_write(e: SqlxError) -> Self {
        match &e {
            SqlxError::Database(db_err) if db_err.is_unique_violation() => {
                CmsError::DuplicateUsername
            }
            _ => CmsError::DatabaseError(e),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CmsError::DuplicateUsername
            | CmsError::MissingFile
            | CmsError::UnexpectedField(_) => StatusCode::BAD_REQUEST,
            // 413 when the body limit tripped, 400 for malformed input
            CmsError::Multipart(e) => e.status(),
            CmsError::InvalidPath(e) => e.status(),
            CmsError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            CmsError::Io(_)
            | CmsError::IoTimeout
            | CmsError::UploadDirUnreadable(_)
            | CmsError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CmsError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match &self {
            CmsError::DatabaseError(e) => {
                error!(error = %e, "database operation failed");
                "Database error".to_string()
            }
            CmsError::Io(e) => {
                error!(error = %e, "file operation failed");
                self.to_string()
            }
            CmsError::UploadDirUnreadable(e) => {
                error!(error = %e, "failed to read upload directory");
                self.to_string()
            }
            CmsError::IoTimeout => {
                error!("file operation timed out");
                self.to_string()
            }
            _ => self.to_string(),
        };
        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

/// Error body shared by every endpoint: `{"error": "<message>"}`.
#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}
