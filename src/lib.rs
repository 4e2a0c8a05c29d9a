//! # Spendlog
//!
//! Spendlog is the backend for a personal expense tracker: username/password
//! registration and login issuing signed, time-limited bearer tokens, plus
//! ownership-scoped CRUD over expense records.
//!
//! ## Architecture
//!
//! The system follows a layered architecture pattern:
//!
//! ```text
//! REST API Layer → Services → Repositories → SQLite
//!      ↓              ↓
//! Auth Middleware   Token Issuer / Password Hasher
//! ```
//!
//! Every expense route passes through the authentication middleware before a
//! handler runs; handlers receive the verified identity as an [`auth::models::AuthContext`]
//! and services accept only a verified [`domain::UserId`] — never a raw request.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod errors;
pub mod observability;
pub mod services;
pub mod storage;

// Re-export commonly used types and traits
pub use config::Config;
pub use errors::{Error, Result};
pub use observability::init_tracing;

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_available() {
        assert!(!VERSION.is_empty());
        assert_eq!(APP_NAME, "spendlog");
    }
}
