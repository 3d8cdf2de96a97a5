/**
 * Application State Management
 *
 * `AppState` is the state every handler receives. It is cheap to clone:
 * the store sits behind an `Arc`, the token service holds only keys and
 * the hasher shares its cached digest through an `Arc`.
 *
 * The `FromRef` implementations let a handler extract just the part it
 * needs, e.g. `State(users): State<Arc<dyn UserStore>>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::UserStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// User persistence
    pub users: Arc<dyn UserStore>,
    /// Session token issuance and verification
    pub tokens: TokenService,
    /// Password hashing
    pub passwords: PasswordHasher,
}

impl AppState {
    /// Assemble state from its parts
    pub fn new(users: Arc<dyn UserStore>, tokens: TokenService, passwords: PasswordHasher) -> Self {
        Self {
            users,
            tokens,
            passwords,
        }
    }
}

impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.passwords.clone()
    }
}

/// In-memory state with a fast hasher, for unit tests
#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    use crate::backend::auth::store::MemoryUserStore;

    AppState::new(
        Arc::new(MemoryUserStore::new()),
        TokenService::new("unit-test-secret"),
        PasswordHasher::new(4),
    )
}
