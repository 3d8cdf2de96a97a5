/**
 * Authentication Handler Types
 *
 * Request and response bodies for the register, login and current-user
 * handlers. Request fields are all optional so that a missing field is
 * reported as a validation error with a useful message rather than a
 * generic deserialization failure.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::UserProfile;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct RegisterRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// Age in years; validated to 0..=150
    pub age: Option<i64>,
    /// Plaintext password (hashed before storage)
    pub password: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Registration response
#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserProfile,
}

/// Login response
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub message: String,
    /// JWT bearer token (24-hour expiration)
    pub token: String,
}

/// Current user response
#[derive(Serialize, Deserialize, Debug)]
pub struct CurrentUserResponse {
    pub user: UserProfile,
}
