/**
 * API Route Handlers
 *
 * # Routes
 *
 * - `POST /api/users` - User registration
 * - `POST /api/sessions/login` - User login
 * - `GET /api/sessions/current` - Current user (requires a bearer token)
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{current_user, login, register};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// `/api/sessions/current` is protected by the `CurrentUser` extractor in
/// its handler signature; the other two routes are public.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/users", post(register))
        .route("/api/sessions/login", post(login))
        .route("/api/sessions/current", get(current_user))
}
