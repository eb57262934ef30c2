use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::CmsError;

/// Numeric `{id}` path segment; parse failures use the JSON error body.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub i64);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = CmsError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}
