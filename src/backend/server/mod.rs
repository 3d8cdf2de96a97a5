//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`config`** - `ServerConfig`, loaded once from the environment
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - Store selection and app creation
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env()`
//! 2. **Store Selection**: Postgres or in-memory
//! 3. **Router Creation**: Routes, tracing layer, JSON 404 fallback

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig};
pub use init::create_app;
pub use state::AppState;
