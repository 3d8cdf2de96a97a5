/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/sessions/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by normalized email
 * 2. Verify password using bcrypt
 * 3. Issue a JWT token
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same 401 and the same body
 * - Both run one bcrypt verification, so they also take the same time
 * - Passwords are never logged or returned
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::validation::validate_login;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing email or password
/// * `401 Unauthorized` - Unknown email or wrong password (indistinguishable)
/// * `500 Internal Server Error` - Store or token signing failure
///
/// # Example Response
///
/// ```json
/// {
///   "message": "Login successful",
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(e) => {
            tracing::warn!("Rejected login body: {}", e.body_text());
            LoginRequest::default()
        }
    };
    let credentials = validate_login(request)?;

    let Some(user) = state.users.find_by_email(&credentials.email).await? else {
        state.passwords.verify_unknown_blocking(credentials.password).await?;
        tracing::debug!("Login failed: no matching account");
        return Err(ApiError::Unauthorized);
    };

    let valid = state
        .passwords
        .verify_blocking(user.clone(), credentials.password)
        .await?;

    if !valid {
        tracing::warn!("Login failed: wrong password for user {}", user.id);
        return Err(ApiError::Unauthorized);
    }

    let token = state.tokens.issue(user.id)?;

    tracing::info!("User logged in successfully: {} ({})", user.id, user.email);

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::users::NewUser;
    use crate::backend::server::state::test_state;

    async fn seed(state: &AppState, email: &str, password: &str) {
        let password_hash = state.passwords.hash(password).unwrap();
        state
            .users
            .create(NewUser {
                first_name: "A".to_string(),
                last_name: "B".to_string(),
                email: email.to_string(),
                age: None,
                password_hash,
            })
            .await
            .unwrap();
    }

    fn credentials(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_login_success() {
        let state = test_state();
        seed(&state, "test@example.com", "password123").await;

        let Json(response) = login(
            State(state.clone()),
            Ok(Json(credentials("Test@Example.com", "password123"))),
        )
        .await
        .unwrap();

        assert_eq!(response.message, "Login successful");
        let user = state.users.find_by_email("test@example.com").await.unwrap().unwrap();
        assert_eq!(state.tokens.user_id(&response.token).unwrap(), user.id);
    }

    #[tokio::test]
    async fn test_login_invalid_password() {
        let state = test_state();
        seed(&state, "test@example.com", "password123").await;

        let result = login(
            State(state),
            Ok(Json(credentials("test@example.com", "wrongpassword"))),
        )
        .await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_login_user_not_found() {
        let result = login(
            State(test_state()),
            Ok(Json(credentials("nonexistent@example.com", "password123"))),
        )
        .await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_login_failures_do_equal_hashing_work() {
        let state = test_state();
        seed(&state, "test@example.com", "password123").await;

        let before = state.passwords.verifications();
        let result = login(
            State(state.clone()),
            Ok(Json(credentials("test@example.com", "wrongpassword"))),
        )
        .await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
        let wrong_password = state.passwords.verifications() - before;

        let before = state.passwords.verifications();
        let result = login(
            State(state.clone()),
            Ok(Json(credentials("nobody@example.com", "wrongpassword"))),
        )
        .await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
        let unknown_email = state.passwords.verifications() - before;

        assert_eq!(wrong_password, 1);
        assert_eq!(unknown_email, wrong_password);
    }

    #[tokio::test]
    async fn test_login_missing_password() {
        let result = login(
            State(test_state()),
            Ok(Json(LoginRequest {
                email: Some("test@example.com".to_string()),
                password: None,
            })),
        )
        .await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
