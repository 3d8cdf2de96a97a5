//! Accounts - Main Library
//!
//! A small user-account service: register with email and password, log in to
//! receive a signed bearer token, and fetch the caller's own profile with that
//! token.
//!
//! # Module Structure
//!
//! Everything lives under **`backend`**:
//!
//! - **`server`** - configuration, application state, app construction
//! - **`routes`** - router assembly
//! - **`auth`** - password hashing, tokens, user store, HTTP handlers
//! - **`middleware`** - the bearer-token extractor for protected routes
//! - **`error`** - the API error taxonomy and its HTTP mapping
//!
//! # Usage
//!
//! ```rust,no_run
//! use accounts::backend::server::{config::ServerConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```

/// Backend server-side code
pub mod backend;
