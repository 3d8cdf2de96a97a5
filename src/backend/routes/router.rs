/**
 * Router Configuration
 *
 * Combines the route configurations into a single Axum router and applies
 * the shared layers.
 *
 * # Layers
 *
 * - `TraceLayer` opens a span per request and logs status and latency
 *
 * Unmatched paths fall through to a JSON 404.
 */

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::error::ApiError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Build the application router
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    // JSON 404 for unknown paths
    let router = router.fallback(|| async { ApiError::NotFound });

    router
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}
