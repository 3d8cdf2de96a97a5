/**
 * Server Initialization
 *
 * Builds the Axum application from a `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Select the user store: Postgres when `DATABASE_URL` is set (connect and
 *    migrate), otherwise the in-memory store
 * 2. Build the token service from the configured secret
 * 3. Create the router with all routes and layers
 *
 * A configured database that cannot be reached is a startup error; the
 * in-memory fallback is only taken when no database was asked for.
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::store::{MemoryUserStore, PgUserStore};
use crate::backend::auth::users::{StoreError, UserStore};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing accounts server");

    let users = load_store(config).await?;
    let app_state = AppState::new(
        users,
        TokenService::new(&config.jwt_secret),
        PasswordHasher::default(),
    );

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}

/// Pick the user store for this configuration
async fn load_store(config: &ServerConfig) -> Result<Arc<dyn UserStore>, StoreError> {
    match &config.database_url {
        Some(url) => Ok(Arc::new(PgUserStore::connect(url).await?)),
        None => {
            tracing::warn!("DATABASE_URL not set. Accounts are kept in memory and lost on restart.");
            Ok(Arc::new(MemoryUserStore::new()))
        }
    }
}
