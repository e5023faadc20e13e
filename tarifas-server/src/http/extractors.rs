//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract and validate an integer client id from the path.
///
/// Rejects before the handler body runs, so a malformed id never
/// reaches the store.
pub struct ClienteId(pub i32);

impl<S> FromRequestParts<S> for ClienteId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Invalid { field: "id" }))?;

        let id = raw
            .parse::<i32>()
            .map_err(|_| ApiError::Validation(ValidationError::Invalid { field: "id" }))?;

        Ok(Self(id))
    }
}
