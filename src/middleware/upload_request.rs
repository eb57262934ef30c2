use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
};
use tracing::debug;

use crate::error::CmsError;

/// Multipart field that carries the uploaded file.
pub const UPLOAD_FIELD: &str = "image";

/// Exactly one file taken from the `image` field of a multipart body.
///
/// Plain text fields are ignored. A second file, or a file under any other
/// field name, is rejected; so is a body with no file at all.
#[derive(Debug)]
pub struct SingleUpload {
    pub original_name: Option<String>,
    pub bytes: Bytes,
}

impl<S> FromRequest<S> for SingleUpload
where
    S: Send + Sync,
{
    type Rejection = CmsError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Non-multipart requests have no file by definition
        let mut multipart = Multipart::from_request(req, state).await.map_err(|rejection| {
            debug!(reason = %rejection, "upload without multipart body");
            CmsError::MissingFile
        })?;

        let mut upload = None;
        while let Some(field) = multipart.next_field().await? {
            if field.file_name().is_none() {
                continue;
            }
            let name = field.name().unwrap_or_default().to_string();
            if name != UPLOAD_FIELD || upload.is_some() {
                return Err(CmsError::UnexpectedField(name));
            }
            let original_name = field.file_name().map(str::to_owned);
            let bytes = field.bytes().await?;
            upload = Some(SingleUpload {
                original_name,
                bytes,
            });
        }

        upload.ok_or(CmsError::MissingFile)
    }
}
