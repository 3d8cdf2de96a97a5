/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /api/users.
 *
 * # Registration Process
 *
 * 1. Validate required fields, email format, password length and age
 * 2. Check if the email is already registered
 * 3. Hash password using bcrypt
 * 4. Create user in the store
 * 5. Return the public profile with 201 Created
 *
 * # Security
 *
 * - Passwords are hashed before they reach the store
 * - Neither the password nor its digest is ever returned
 * - The store's own duplicate check backs up step 2, so two concurrent
 *   registrations of one email cannot both succeed
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::{RegisterRequest, RegisterResponse};
use crate::backend::auth::users::NewUser;
use crate::backend::auth::validation::validate_registration;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Invalid body, missing fields, bad email, short password, bad age
/// * `400 Bad Request` (`DUPLICATE_EMAIL`) - Email already registered
/// * `500 Internal Server Error` - Hashing or store failure
///
/// # Example Request
///
/// ```http
/// POST /api/users HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "first_name": "A",
///   "last_name": "B",
///   "email": "a@b.com",
///   "password": "secret1"
/// }
/// ```
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected registration body: {}", e.body_text());
        ApiError::validation("Request body must be a valid JSON object")
    })?;

    let registration = validate_registration(request).map_err(|e| {
        tracing::warn!("Registration validation failed: {}", e);
        e
    })?;
    tracing::info!("Registration request for: {}", registration.email);

    if state.users.find_by_email(&registration.email).await?.is_some() {
        tracing::warn!("Email already registered: {}", registration.email);
        return Err(ApiError::DuplicateEmail);
    }

    let password_hash = state.passwords.hash_blocking(registration.password).await?;

    let user = state
        .users
        .create(NewUser {
            first_name: registration.first_name,
            last_name: registration.last_name,
            email: registration.email,
            age: registration.age,
            password_hash,
        })
        .await
        .map_err(|e| {
            tracing::warn!("Failed to create user: {}", e);
            ApiError::from(e)
        })?;

    tracing::info!("User created successfully: {} ({})", user.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created successfully".to_string(),
            user: user.into(),
        }),
    ))
}
