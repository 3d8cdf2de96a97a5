//! Authentication Module
//!
//! User registration, credential checks and token issuance.
//!
//! # Architecture
//!
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - JWT issuance and verification
//! - **`users`** - User model and the `UserStore` trait
//! - **`store`** - Postgres and in-memory `UserStore` implementations
//! - **`validation`** - Request body checks
//! - **`handlers`** - HTTP handlers for the account endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: Profile + password → validated → password hashed → user stored
//! 2. **Login**: Email + password → credentials verified → JWT token returned
//! 3. **Current**: JWT token → token verified → user loaded → profile returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are used for stateless authentication
//! - Tokens expire after 24 hours
//! - Invalid credentials return one 401 response whatever the cause

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// User data model and store interface
pub mod users;

/// User store implementations
pub mod store;

/// Request validation
pub mod validation;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{current_user, login, register};
pub use password::PasswordHasher;
pub use sessions::TokenService;
pub use users::{NewUser, StoreError, User, UserProfile, UserStore};
