/**
 * Error Conversion
 *
 * `IntoResponse` for `ApiError`, so handlers can return it directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Invalid credentials",
 *   "code": "UNAUTHORIZED"
 * }
 * ```
 *
 * Internal errors are logged here with their detail; the body only ever
 * carries the generic message.
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::backend::error::types::ApiError;

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.public_message(),
            code: err.code(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!("Internal error: {}", detail);
        }

        let status = self.status_code();
        (status, Json(ErrorBody::from(&self))).into_response()
    }
}
