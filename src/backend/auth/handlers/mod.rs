//! Authentication Handlers Module
//!
//! HTTP handlers for the account endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Handler exports
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration handler
//! ├── login.rs     - User authentication handler
//! └── current.rs   - Current user handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/users - User registration
//! - **`login`** - POST /api/sessions/login - Credential check, token issuance
//! - **`current_user`** - GET /api/sessions/current - Caller's profile

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Current user handler
pub mod current;

// Re-export commonly used types
pub use types::{CurrentUserResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

// Re-export handlers
pub use current::current_user;
pub use login::login;
pub use register::register;
