//! Error responses.
//!
//! Two request-level failures exist: an empty result (404) and a malformed
//! numeric parameter (400). Both render as `{"message": "..."}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!(status = %status, message = %self, "Request rejected");
        (status, Json(ErrorBody { message: self.to_string() })).into_response()
    }
}

/// Render `items` as JSON, or a 404 carrying `message` when there are none.
pub fn non_empty<T: Serialize>(
    items: Vec<T>,
    message: impl FnOnce() -> String,
) -> Result<Response, ApiError> {
    if items.is_empty() {
        Err(ApiError::NotFound(message()))
    } else {
        Ok(Json(items).into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::BadRequest("x".into()).status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_non_empty() {
        let ok = non_empty(vec![1, 2], String::new).unwrap();
        assert_eq!(ok.status(), StatusCode::OK);

        let err = non_empty(Vec::<u8>::new(), || "nothing here".into())
            .err()
            .expect("empty list should be rejected");
        assert_eq!(err.to_string(), "nothing here");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
