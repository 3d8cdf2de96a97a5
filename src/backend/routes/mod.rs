//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router creation and layers
//! └── api_routes.rs   - Account API endpoints
//! ```
//!
//! ## API Routes
//!
//! - `POST /api/users` - User registration
//! - `POST /api/sessions/login` - User login
//! - `GET /api/sessions/current` - Current user

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
