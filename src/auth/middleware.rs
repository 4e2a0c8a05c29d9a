//! Axum middleware gating the expense routes.
//!
//! Extracts the bearer token from the `Authorization` header, verifies it
//! against the [`TokenIssuer`], and attaches the resolved identity to the
//! request extensions. Identity never comes from the request body.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::api::error::ApiError;
use crate::auth::jwt::TokenIssuer;
use crate::auth::models::AuthContext;
use crate::errors::{AuthErrorType, Error};

pub type TokenIssuerState = Arc<TokenIssuer>;

/// Middleware entry point that authenticates requests using the configured
/// [`TokenIssuer`].
pub async fn authenticate(
    State(issuer): State<TokenIssuerState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let header =
        request.headers().get(AUTHORIZATION).and_then(|value| value.to_str().ok()).unwrap_or("");

    let token = match extract_bearer(header) {
        Some(token) => token,
        None => {
            warn!(path = %request.uri().path(), "request without bearer token");
            return Err(ApiError::from(Error::auth(
                "Access denied. No token provided.",
                AuthErrorType::MissingToken,
            )));
        }
    };

    match issuer.verify(token) {
        Ok(user_id) => {
            request.extensions_mut().insert(AuthContext::new(user_id));
            Ok(next.run(request).await)
        }
        Err(err) => {
            warn!(path = %request.uri().path(), error = %err, "bearer token verification failed");
            Err(ApiError::from(err))
        }
    }
}

/// Extract the token from an `Authorization` header value with a
/// case-insensitive `Bearer ` scheme prefix.
fn extract_bearer(header: &str) -> Option<&str> {
    let header = header.trim();
    if header.len() <= 7 || !header[..7].eq_ignore_ascii_case("bearer ") {
        return None;
    }
    let token = header[7..].trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_token_from_bearer_header() {
        assert_eq!(extract_bearer("Bearer abc.def.ghi"), Some("abc.def.ghi"));
    }

    #[test]
    fn scheme_prefix_is_case_insensitive() {
        assert_eq!(extract_bearer("bearer abc"), Some("abc"));
        assert_eq!(extract_bearer("BEARER abc"), Some("abc"));
    }

    #[test]
    fn missing_or_bare_header_yields_none() {
        assert_eq!(extract_bearer(""), None);
        assert_eq!(extract_bearer("Bearer "), None);
        assert_eq!(extract_bearer("Basic abc"), None);
        assert_eq!(extract_bearer("abc"), None);
    }
}
