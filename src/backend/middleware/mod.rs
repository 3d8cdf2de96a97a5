//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - `CurrentUser` extractor guarding protected routes

pub mod auth;

pub use auth::{bearer_token, CurrentUser};
