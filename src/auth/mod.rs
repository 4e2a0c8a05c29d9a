//! Authentication and authorization module entry point.
//!
//! Exposes the authentication stack for Spendlog: password hashing, the JWT
//! token issuer/verifier, the registration/login service, and the axum
//! middleware that gates expense routes.

pub mod hashing;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod service;
pub mod validation;

pub use jwt::TokenIssuer;
pub use models::{AuthContext, User};
pub use service::AuthService;
pub use validation::{LoginRequest, RegisterRequest};
