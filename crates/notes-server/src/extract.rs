//! Request body extraction with explicit validation failures.
//!
//! Malformed bodies are a validation error in this API's contract and must
//! surface as 400 with a `{"message": ...}` body, not as the framework's
//! default rejection. `ValidJson` wraps `axum::Json` to pin that behavior
//! down in one place instead of relying on extractor defaults.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor that rejects malformed input with 400.
///
/// Covers missing required fields, wrong field types, unknown fields (when
/// the target type opts in via `deny_unknown_fields`), and bodies that are
/// not JSON at all.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
        }
    }
}
