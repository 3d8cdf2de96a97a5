/**
 * Input Validation
 *
 * Shape checks for registration and login bodies. Each check fails with a
 * `ApiError::Validation` carrying a message that is safe to show clients.
 */

use std::sync::LazyLock;

use regex::Regex;

use crate::backend::auth::handlers::types::{LoginRequest, RegisterRequest};
use crate::backend::error::ApiError;

/// Minimum plaintext password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// Largest accepted age
pub const MAX_AGE: i64 = 150;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// A registration body that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: Option<i32>,
    pub password: String,
}

/// A login body that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidLogin {
    pub email: String,
    pub password: String,
}

/// Trim and lowercase an email address
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Whether `email` looks like `local@domain.tld`
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Take a field that must be present and non-blank
fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Validate a registration body
pub fn validate_registration(request: RegisterRequest) -> Result<ValidRegistration, ApiError> {
    let (Some(first_name), Some(last_name), Some(email), Some(password)) = (
        required(request.first_name),
        required(request.last_name),
        required(request.email),
        required(request.password),
    ) else {
        return Err(ApiError::validation(
            "All fields are required (first_name, last_name, email, password)",
        ));
    };

    let email = normalize_email(&email);
    if !is_valid_email(&email) {
        return Err(ApiError::validation("Invalid email format"));
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    let age = match request.age {
        None => None,
        Some(age) if (0..=MAX_AGE).contains(&age) => {
            Some(i32::try_from(age).map_err(|_| ApiError::validation("Invalid age"))?)
        }
        Some(_) => return Err(ApiError::validation("Invalid age")),
    };

    Ok(ValidRegistration {
        first_name: first_name.trim().to_string(),
        last_name: last_name.trim().to_string(),
        email,
        age,
        password,
    })
}

/// Validate a login body
pub fn validate_login(request: LoginRequest) -> Result<ValidLogin, ApiError> {
    match (required(request.email), required(request.password)) {
        (Some(email), Some(password)) => Ok(ValidLogin {
            email: normalize_email(&email),
            password,
        }),
        _ => Err(ApiError::validation("Email and password are required")),
    }
}
