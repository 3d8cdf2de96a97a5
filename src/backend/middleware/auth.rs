/**
 * Authentication Extractor
 *
 * Protected handlers take a `CurrentUser` argument. Extracting it reads
 * the `Authorization: Bearer <token>` header, verifies the token and loads
 * the user it names. The handler receives the loaded user directly; there
 * is no request-extension side channel.
 *
 * Every failure (no header, other scheme, bad or expired token, user gone)
 * is a 401 with the same body. Only a store failure is a 500.
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::backend::auth::users::User;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// The authenticated caller of a protected route
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

/// Pull the token out of an `Authorization: Bearer <token>` header
///
/// The scheme is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or_else(|| {
            tracing::warn!("Missing or malformed Authorization header");
            ApiError::Unauthorized
        })?;

        let user_id = state.tokens.user_id(token).map_err(|e| {
            tracing::warn!("Invalid token");
            tracing::debug!("Token rejected: {}", e);
            ApiError::Unauthorized
        })?;

        let user = state.users.find_by_id(user_id).await?.ok_or_else(|| {
            tracing::warn!("Token names unknown user {}", user_id);
            ApiError::Unauthorized
        })?;

        Ok(CurrentUser(user))
    }
}
