/**
 * User Model and Store Interface
 *
 * This module defines the account record, the public profile derived from
 * it, and the `UserStore` trait the handlers persist through.
 *
 * Store implementations live in `auth::store`.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// User struct representing a stored account
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Email address, lowercase, unique
    pub email: String,
    /// Age in years, if provided
    pub age: Option<i32>,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields for a user about to be created
///
/// The password is already hashed by the time it gets here.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: Option<i32>,
    pub password_hash: String,
}

/// User as returned to clients
///
/// Deliberately has no password field of any kind.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            age: user.age,
            created_at: user.created_at,
        }
    }
}

/// User store failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// A user with this email already exists
    #[error("duplicate key: email already exists")]
    DuplicateKey,

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Any other backend failure
    #[error("store error: {message}")]
    Backend {
        /// Human-readable error message
        message: String,
    },
}

impl StoreError {
    /// Create a backend error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// Persistence for user accounts
///
/// `create` must reject a duplicate email atomically: checking first and
/// inserting afterwards is not enough when requests run concurrently.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by (normalized) email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Find a user by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Create a user, failing with [`StoreError::DuplicateKey`] if the email exists
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError>;
}
