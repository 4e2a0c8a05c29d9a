//! Registration and login orchestration.

use std::sync::{Arc, LazyLock};

use tracing::{info, instrument, warn};
use validator::Validate;

use crate::auth::hashing;
use crate::auth::jwt::TokenIssuer;
use crate::auth::models::{NewUser, User};
use crate::auth::validation::{LoginRequest, RegisterRequest};
use crate::domain::UserId;
use crate::errors::{AuthErrorType, Error, Result};
use crate::storage::repositories::{SqlxUserRepository, UserRepository};

/// Minimum username length in characters, after trimming.
const MIN_USERNAME_LEN: usize = 3;

/// Pre-computed dummy hash for timing-safe user enumeration prevention.
/// When an unknown username is used, we still run Argon2 verification against
/// this hash so the response time matches real verification.
static DUMMY_HASH: LazyLock<String> = LazyLock::new(|| {
    hashing::hash_password("dummy_startup_value")
        .unwrap_or_else(|_| "$argon2id$v=19$m=768,t=1,p=1$dW5rbm93bg$dW5rbm93bg".to_string())
});

/// Service for handling username/password authentication.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    issuer: Arc<TokenIssuer>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, issuer: Arc<TokenIssuer>) -> Self {
        Self { users, issuer }
    }

    pub fn with_sqlx(pool: crate::storage::DbPool, issuer: Arc<TokenIssuer>) -> Self {
        Self::new(Arc::new(SqlxUserRepository::new(pool)), issuer)
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a short username or password and a
    /// conflict error when the username is already taken.
    #[instrument(skip(self, request), fields(username = %request.trimmed_username()))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<User> {
        request.validate()?;

        let username = request.trimmed_username();
        if username.chars().count() < MIN_USERNAME_LEN {
            return Err(Error::validation_field(
                "Username must be at least 3 characters.",
                "username",
            ));
        }

        if self.users.find_by_username(username).await?.is_some() {
            warn!(username = %username, "registration attempt with taken username");
            return Err(Error::conflict("Username already taken."));
        }

        let password_hash = hashing::hash_password(&request.password)?;
        let user = self
            .users
            .create_user(NewUser {
                id: UserId::new(),
                username: username.to_string(),
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Authenticate with username and password, returning a signed bearer
    /// token on success.
    ///
    /// The error for an unknown username and the error for a wrong password
    /// are identical so the endpoint cannot be used for username enumeration.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: &LoginRequest) -> Result<String> {
        request.validate()?;

        let username = request.username.trim();
        let (user, password_hash) = match self.users.get_user_with_password(username).await? {
            Some(found) => found,
            None => {
                // Prevent timing-based user enumeration: perform dummy hash
                // verification so response time matches real verification
                if let Err(e) = hashing::verify_password(&request.password, &DUMMY_HASH) {
                    warn!(error = %e, "dummy hash verification failed unexpectedly");
                }
                warn!(username = %username, "login attempt for non-existent user");
                return Err(Error::auth(
                    "Invalid credentials.",
                    AuthErrorType::InvalidCredentials,
                ));
            }
        };

        if !hashing::verify_password(&request.password, &password_hash)? {
            warn!(user_id = %user.id, "login attempt with incorrect password");
            return Err(Error::auth("Invalid credentials.", AuthErrorType::InvalidCredentials));
        }

        let token = self.issuer.issue(&user.id)?;
        info!(user_id = %user.id, "user logged in successfully");
        Ok(token)
    }
}
