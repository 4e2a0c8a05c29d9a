//! Request types for registration and login.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Body for `POST /api/auth/register`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Desired username; surrounding whitespace is trimmed before validation.
    #[validate(length(min = 1, message = "Username and a password (min 6 chars) are required."))]
    pub username: String,

    #[validate(length(min = 6, message = "Username and a password (min 6 chars) are required."))]
    pub password: String,
}

impl RegisterRequest {
    /// Username with surrounding whitespace removed.
    pub fn trimmed_username(&self) -> &str {
        self.username.trim()
    }
}

/// Body for `POST /api/auth/login`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username and password are required."))]
    pub username: String,

    #[validate(length(min = 1, message = "Username and password are required."))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_password_fails_validation() {
        let request =
            RegisterRequest { username: "alice".to_string(), password: "short".to_string() };
        assert!(request.validate().is_err());
    }

    #[test]
    fn valid_register_request_passes() {
        let request =
            RegisterRequest { username: "alice".to_string(), password: "secret1".to_string() };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn username_is_trimmed() {
        let request =
            RegisterRequest { username: "  alice  ".to_string(), password: "secret1".to_string() };
        assert_eq!(request.trimmed_username(), "alice");
    }

    #[test]
    fn empty_login_fields_fail_validation() {
        let request = LoginRequest { username: String::new(), password: String::new() };
        assert!(request.validate().is_err());
    }
}
