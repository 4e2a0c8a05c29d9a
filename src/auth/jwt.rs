//! JWT bearer token issuance and verification.
//!
//! Tokens are self-contained HS256 JWTs whose subject is the owning user's
//! id. The signing secret is injected at construction from [`crate::config::AuthConfig`];
//! rotating it invalidates all outstanding tokens, which is acceptable given
//! the short expiry.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::UserId;
use crate::errors::{AuthErrorType, Error, Result};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // Subject (owning user id)
    pub iat: i64,    // Issued at time
    pub exp: i64,    // Expiration time
}

/// Issues and verifies signed bearer tokens.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create a new token issuer with the given secret and token lifetime.
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::default();
        // Tokens expire exactly at `exp`; the default 60s leeway would keep
        // just-expired tokens alive.
        validation.leeway = 0;
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Issue a token for the given user with the issuer's configured lifetime.
    pub fn issue(&self, owner: &UserId) -> Result<String> {
        self.issue_with_ttl(owner, self.ttl)
    }

    /// Issue a token with an explicit lifetime.
    pub fn issue_with_ttl(&self, owner: &UserId, ttl: Duration) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = Claims { sub: owner.to_string(), iat: now, exp: now + ttl.num_seconds() };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| Error::internal(format!("Failed to sign token: {}", e)))
    }

    /// Verify a token and return the user id it encodes.
    ///
    /// Fails with an expired-token error once `exp` has passed and an
    /// invalid-token error for bad signatures or malformed payloads.
    pub fn verify(&self, token: &str) -> Result<UserId> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    Error::auth("Token has expired.", AuthErrorType::ExpiredToken)
                }
                _ => Error::auth("Invalid token.", AuthErrorType::InvalidToken),
            }
        })?;
        Ok(UserId::from_string(data.claims.sub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(SECRET, Duration::hours(1))
    }

    #[test]
    fn issue_then_verify_returns_owner() {
        let issuer = issuer();
        let owner = UserId::new();
        let token = issuer.issue(&owner).unwrap();
        assert_eq!(issuer.verify(&token).unwrap(), owner);
    }

    #[test]
    fn expired_token_is_rejected() {
        let issuer = issuer();
        let owner = UserId::new();
        let token = issuer.issue_with_ttl(&owner, Duration::seconds(-1)).unwrap();
        match issuer.verify(&token) {
            Err(Error::Auth { error_type, .. }) => {
                assert_eq!(error_type, AuthErrorType::ExpiredToken)
            }
            other => panic!("expected expired-token error, got {other:?}"),
        }
    }

    #[test]
    fn forged_token_is_rejected() {
        let owner = UserId::new();
        let token = TokenIssuer::new(b"another-secret-another-secret-xx", Duration::hours(1))
            .issue(&owner)
            .unwrap();
        match issuer().verify(&token) {
            Err(Error::Auth { error_type, .. }) => {
                assert_eq!(error_type, AuthErrorType::InvalidToken)
            }
            other => panic!("expected invalid-token error, got {other:?}"),
        }
    }

    #[test]
    fn garbage_token_is_rejected() {
        match issuer().verify("not.a.jwt") {
            Err(Error::Auth { error_type, .. }) => {
                assert_eq!(error_type, AuthErrorType::InvalidToken)
            }
            other => panic!("expected invalid-token error, got {other:?}"),
        }
    }
}
