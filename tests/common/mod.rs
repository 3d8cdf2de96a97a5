//! Common test utilities and helpers
//!
//! Builds the full router over an in-memory store with the cheapest bcrypt
//! cost, and wraps the register/login round trips the API tests repeat.

#![allow(dead_code)]

use std::sync::Arc;

use accounts::backend::auth::store::MemoryUserStore;
use accounts::backend::auth::{NewUser, PasswordHasher, StoreError, TokenService, User, UserStore};
use accounts::backend::routes::create_router;
use accounts::backend::server::AppState;
use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use axum_test::{TestResponse, TestServer};
use serde_json::{json, Value};
use uuid::Uuid;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application: the server plus the state behind it
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

/// Detail a failing store puts in its errors; must never reach a response
pub const STORE_FAILURE_DETAIL: &str = "connection to 10.0.0.7:5432 refused (password=hunter2)";

/// Create a test server over a fresh in-memory store
pub fn test_app() -> TestApp {
    test_app_with(Arc::new(MemoryUserStore::new()), PasswordHasher::new(4))
}

/// Create a test server over the given store and hasher
pub fn test_app_with(users: Arc<dyn UserStore>, passwords: PasswordHasher) -> TestApp {
    let state = AppState::new(users, TokenService::new(TEST_SECRET), passwords);
    let server = TestServer::new(create_router(state.clone())).expect("Failed to create test server");
    TestApp { server, state }
}

/// A store whose every operation fails
pub struct FailingStore;

#[async_trait::async_trait]
impl UserStore for FailingStore {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
        Err(StoreError::backend(STORE_FAILURE_DETAIL))
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>, StoreError> {
        Err(StoreError::backend(STORE_FAILURE_DETAIL))
    }

    async fn create(&self, _new_user: NewUser) -> Result<User, StoreError> {
        Err(StoreError::backend(STORE_FAILURE_DETAIL))
    }
}

/// A valid registration body
pub fn registration(email: &str) -> Value {
    json!({
        "first_name": "A",
        "last_name": "B",
        "email": email,
        "password": "secret1"
    })
}

/// Authorization header value for a token
pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).expect("token is a valid header value")
}

impl TestApp {
    pub async fn register(&self, body: &Value) -> TestResponse {
        self.server.post("/api/users").json(body).await
    }

    pub async fn login(&self, email: &str, password: &str) -> TestResponse {
        self.server
            .post("/api/sessions/login")
            .json(&json!({ "email": email, "password": password }))
            .await
    }

    pub async fn current(&self, authorization: Option<HeaderValue>) -> TestResponse {
        let request = self.server.get("/api/sessions/current");
        match authorization {
            Some(value) => request.add_header(AUTHORIZATION, value).await,
            None => request.await,
        }
    }

    /// Register and log in, returning the token
    pub async fn register_and_login(&self, email: &str) -> String {
        let response = self.register(&registration(email)).await;
        assert_eq!(response.status_code(), StatusCode::CREATED);

        let response = self.login(email, "secret1").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        response.json::<Value>()["token"]
            .as_str()
            .expect("login returns a token")
            .to_string()
    }
}
