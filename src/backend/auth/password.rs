/**
 * Password Hashing
 *
 * One-way salted hashing of account passwords with bcrypt. The digest is
 * what gets stored; the plaintext never leaves the request that carried it.
 *
 * # Work Factor
 *
 * Production uses `bcrypt::DEFAULT_COST`. Tests construct the hasher with
 * `bcrypt::MIN_COST` so they stay fast.
 */

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use thiserror::Error;

use crate::backend::auth::users::User;

/// Plaintext behind the stand-in digest checked for unknown accounts
const DUMMY_PASSWORD: &str = "no-such-account";

/// Password hashing failures
#[derive(Debug, Error)]
pub enum PasswordError {
    /// bcrypt rejected the input or failed internally
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// The blocking task running the hash was cancelled or panicked
    #[error("password hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Salted one-way password hasher
///
/// Clones share the stand-in digest and the verification counter.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
    dummy_digest: Arc<OnceLock<String>>,
    verifications: Arc<AtomicU64>,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher {
    /// Create a hasher with an explicit bcrypt cost
    pub fn new(cost: u32) -> Self {
        Self {
            cost,
            dummy_digest: Arc::new(OnceLock::new()),
            verifications: Arc::new(AtomicU64::new(0)),
        }
    }

    /// bcrypt cost this hasher uses
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Number of digest verifications run so far
    pub fn verifications(&self) -> u64 {
        self.verifications.load(Ordering::Relaxed)
    }

    /// Hash a plaintext password
    ///
    /// Two calls with the same plaintext produce different digests because
    /// each call draws a fresh salt.
    pub fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        Ok(bcrypt::hash(plaintext, self.cost)?)
    }

    /// Check a plaintext password against a user's stored digest
    ///
    /// Returns `false` for a wrong password. A digest bcrypt cannot parse is
    /// logged and also treated as a mismatch.
    pub fn verify(&self, user: &User, plaintext: &str) -> bool {
        match self.verify_digest(&user.password_hash, plaintext) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::error!("Stored password digest for user {} is unusable: {:?}", user.id, e);
                false
            }
        }
    }

    /// Run a full verification against a digest of this hasher's cost and
    /// return `false`
    ///
    /// Login calls this when no account matches, so an unknown email costs
    /// the same bcrypt work as a wrong password.
    pub fn verify_unknown(&self, plaintext: &str) -> Result<bool, PasswordError> {
        let digest = self.dummy_digest()?;
        self.verify_digest(digest, plaintext)?;
        Ok(false)
    }

    /// [`hash`](Self::hash) on the blocking thread pool
    pub async fn hash_blocking(&self, plaintext: String) -> Result<String, PasswordError> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext)).await?
    }

    /// [`verify`](Self::verify) on the blocking thread pool
    pub async fn verify_blocking(&self, user: User, plaintext: String) -> Result<bool, PasswordError> {
        let hasher = self.clone();
        Ok(tokio::task::spawn_blocking(move || hasher.verify(&user, &plaintext)).await?)
    }

    /// [`verify_unknown`](Self::verify_unknown) on the blocking thread pool
    pub async fn verify_unknown_blocking(&self, plaintext: String) -> Result<bool, PasswordError> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.verify_unknown(&plaintext)).await?
    }

    fn verify_digest(&self, digest: &str, plaintext: &str) -> Result<bool, bcrypt::BcryptError> {
        self.verifications.fetch_add(1, Ordering::Relaxed);
        bcrypt::verify(plaintext, digest)
    }

    fn dummy_digest(&self) -> Result<&str, PasswordError> {
        if let Some(digest) = self.dummy_digest.get() {
            return Ok(digest);
        }
        let digest = self.hash(DUMMY_PASSWORD)?;
        Ok(self.dummy_digest.get_or_init(|| digest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user_with_digest(password_hash: String) -> User {
        User {
            id: uuid::Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            age: None,
            password_hash,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let hasher = PasswordHasher::new(4);
        let digest = hasher.hash("secret1").unwrap();
        assert_ne!(digest, "secret1");
        assert!(!digest.contains("secret1"));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = PasswordHasher::new(4);
        let first = hasher.hash("secret1").unwrap();
        let second = hasher.hash("secret1").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_matches() {
        let hasher = PasswordHasher::new(4);
        let user = user_with_digest(hasher.hash("secret1").unwrap());
        assert!(hasher.verify(&user, "secret1"));
    }

    #[test]
    fn test_verify_mismatch_is_false() {
        let hasher = PasswordHasher::new(4);
        let user = user_with_digest(hasher.hash("secret1").unwrap());
        assert!(!hasher.verify(&user, "secret2"));
        assert!(!hasher.verify(&user, ""));
    }

    #[test]
    fn test_verify_malformed_digest_is_false() {
        let hasher = PasswordHasher::new(4);
        let user = user_with_digest("not-a-bcrypt-digest".to_string());
        assert!(!hasher.verify(&user, "secret1"));
    }

    #[test]
    fn test_default_cost() {
        assert_eq!(PasswordHasher::default().cost(), bcrypt::DEFAULT_COST);
    }

    #[test]
    fn test_verify_unknown_is_false_and_counts() {
        let hasher = PasswordHasher::new(4);
        assert!(!hasher.verify_unknown("secret1").unwrap());
        assert!(!hasher.verify_unknown(DUMMY_PASSWORD).unwrap());
        assert_eq!(hasher.verifications(), 2);
    }

    #[test]
    fn test_dummy_digest_uses_hasher_cost() {
        let hasher = PasswordHasher::new(4);
        let digest = hasher.dummy_digest().unwrap().to_string();
        assert!(digest.starts_with(&format!("$2b${:02}$", 4)));
        assert_eq!(hasher.dummy_digest().unwrap(), digest);
    }

    #[test]
    fn test_clones_share_counter() {
        let hasher = PasswordHasher::new(4);
        let user = user_with_digest(hasher.hash("secret1").unwrap());
        hasher.clone().verify(&user, "secret1");
        assert_eq!(hasher.verifications(), 1);
    }

    #[tokio::test]
    async fn test_blocking_round_trip() {
        let hasher = PasswordHasher::new(4);
        let digest = hasher.hash_blocking("secret1".to_string()).await.unwrap();
        let user = user_with_digest(digest);
        assert!(hasher.verify_blocking(user.clone(), "secret1".to_string()).await.unwrap());
        assert!(!hasher.verify_blocking(user, "nope".to_string()).await.unwrap());
    }
}
