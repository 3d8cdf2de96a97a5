//! Backend Module
//!
//! This module contains all server-side code for the accounts service.
//! It provides an Axum HTTP server exposing registration, login and
//! current-user endpoints backed by a pluggable user store.
//!
//! # Architecture
//!
//! - **`server`** - Server configuration, application state, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Passwords, JWT tokens, user store, handlers
//! - **`middleware`** - Bearer-token authentication extractor
//! - **`error`** - Backend error types and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Configuration, state, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication and user management
//! ├── middleware/     - Request authentication
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! Handlers share an [`AppState`](server::AppState) holding the user store
//! behind an `Arc<dyn UserStore>`, the token service and the password hasher.
//! None of these carry mutable state of their own; the store is the only
//! shared resource that changes.
//!
//! # Error Handling
//!
//! Every handler returns `Result<_, ApiError>`. Lower layers have their own
//! error enums which convert into [`ApiError`] at the handler boundary, so no
//! error reaches the client as anything but one of the documented categories.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::ApiError;
pub use server::create_app;
