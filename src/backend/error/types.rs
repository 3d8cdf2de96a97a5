/**
 * API Error Types
 *
 * This module defines the error taxonomy every handler reports in.
 * Each variant maps to exactly one HTTP status and one stable error code.
 *
 * # Error Categories
 *
 * - `Validation` - malformed or missing input (400)
 * - `DuplicateEmail` - registration with an email that already exists (400)
 * - `Unauthorized` - bad credentials, or a missing/invalid bearer token (401)
 * - `NotFound` - no route matched (404)
 * - `Internal` - store, hashing or signing failure (500)
 *
 * Lower-layer errors (store, token, password) convert into `ApiError`
 * through `From`, so handlers can use `?` directly.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::password::PasswordError;
use crate::backend::auth::sessions::TokenError;
use crate::backend::auth::users::StoreError;

/// Message returned for every credential or token failure
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Backend error taxonomy
///
/// The `Display` text of `Internal` carries the detail for logging only;
/// the response body uses [`ApiError::public_message`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Email already registered
    #[error("Email is already registered")]
    DuplicateEmail,

    /// Credentials or token rejected
    #[error("Unauthorized")]
    Unauthorized,

    /// No such route
    #[error("Not found")]
    NotFound,

    /// Unexpected failure (store, hashing, signing)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an internal error
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::DuplicateEmail => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotFound => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to clients
    ///
    /// Internal details are never part of this.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::DuplicateEmail => "Email is already registered".to_string(),
            Self::Unauthorized => INVALID_CREDENTIALS.to_string(),
            Self::NotFound => "Not found".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey => Self::DuplicateEmail,
            other => Self::internal(other.to_string()),
        }
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Encode(e) => Self::internal(format!("failed to sign token: {}", e)),
            TokenError::Invalid(_) | TokenError::InvalidSubject(_) => Self::Unauthorized,
        }
    }
}
