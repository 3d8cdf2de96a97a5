/**
 * Session Tokens
 *
 * JWT issuance and verification. Tokens are HS256-signed with the server
 * secret and carry only the user id, the issue time and the expiry.
 * Nothing is persisted: a token is valid exactly as long as its signature
 * checks out and it has not expired.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Token lifetime: 24 hours
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Token failures
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing failed
    #[error("token encoding failed: {0}")]
    Encode(jsonwebtoken::errors::Error),

    /// Malformed, wrongly signed or expired token
    #[error("token rejected: {0}")]
    Invalid(jsonwebtoken::errors::Error),

    /// Signature valid but the subject is not a user id
    #[error("token subject is not a user id: {0}")]
    InvalidSubject(String),
}

/// Issues and verifies session tokens
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a token service with the default 24-hour lifetime
    pub fn new(secret: &str) -> Self {
        Self::with_ttl(secret, TOKEN_TTL_SECS)
    }

    /// Create a token service with a custom lifetime
    pub fn with_ttl(secret: &str, ttl_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs,
        }
    }

    /// Token lifetime in seconds
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Issue a token for a user, starting now
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.issue_at(user_id, Utc::now().timestamp())
    }

    /// Issue a token as if it had been issued at `issued_at`
    pub fn issue_at(&self, user_id: Uuid, issued_at: i64) -> Result<String, TokenError> {
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at,
            exp: issued_at + self.ttl_secs,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Encode)
    }

    /// Verify signature and expiry and decode the claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(TokenError::Invalid)
    }

    /// Verify a token and return the user id it was issued for
    pub fn user_id(&self, token: &str) -> Result<Uuid, TokenError> {
        let claims = self.verify(token)?;
        Uuid::parse_str(&claims.sub).map_err(|_| TokenError::InvalidSubject(claims.sub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_issue_and_verify() {
        let service = TokenService::new(SECRET);
        let user_id = Uuid::new_v4();
        let token = service.issue(user_id).unwrap();
        assert!(!token.is_empty());

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_user_id_from_token() {
        let service = TokenService::new(SECRET);
        let user_id = Uuid::new_v4();
        let token = service.issue(user_id).unwrap();
        assert_eq!(service.user_id(&token).unwrap(), user_id);
    }

    #[test]
    fn test_claims_carry_no_extra_fields() {
        let service = TokenService::new(SECRET);
        let token = service.issue(Uuid::new_v4()).unwrap();
        let claims: serde_json::Value = serde_json::to_value(service.verify(&token).unwrap()).unwrap();
        let mut keys: Vec<_> = claims.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["exp", "iat", "sub"]);
    }

    #[test]
    fn test_verify_invalid_token() {
        let service = TokenService::new(SECRET);
        assert!(matches!(
            service.verify("invalid.token.here"),
            Err(TokenError::Invalid(_))
        ));
        assert!(service.verify("").is_err());
    }

    #[test]
    fn test_verify_expired_token() {
        let service = TokenService::new(SECRET);
        let issued_at = Utc::now().timestamp() - TOKEN_TTL_SECS - 60;
        let token = service.issue_at(Uuid::new_v4(), issued_at).unwrap();
        assert!(matches!(service.verify(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_verify_wrong_secret() {
        let issuer = TokenService::new(SECRET);
        let verifier = TokenService::new("another-secret");
        let token = issuer.issue(Uuid::new_v4()).unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_verify_tampered_token() {
        let service = TokenService::new(SECRET);
        let token = service.issue(Uuid::new_v4()).unwrap();
        let other = service.issue(Uuid::new_v4()).unwrap();

        // Payload of one token with the signature of another
        let parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);
        assert!(service.verify(&forged).is_err());
    }

    #[test]
    fn test_non_uuid_subject() {
        let service = TokenService::new(SECRET);
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "alice".to_string(),
            iat: now,
            exp: now + 60,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            service.user_id(&token),
            Err(TokenError::InvalidSubject(sub)) if sub == "alice"
        ));
    }
}
