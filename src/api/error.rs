//! Mapping from service errors onto HTTP responses.
//!
//! Status codes follow the service's deliberate choices: a duplicate username
//! and bad credentials are both 400 (not 409/403), an invalid or expired
//! token is 400 while a missing one is 401, and "not found" covers records
//! that exist but belong to someone else.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::errors::{AuthErrorType, Error};

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn bad_request<S: Into<String>>(msg: S) -> Self {
        ApiError::BadRequest(msg.into())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let message = match self {
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg) => msg,
            // Never leak internal failure detail to clients.
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed with internal error");
                "Internal server error.".to_string()
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation { message, .. } => ApiError::BadRequest(message),
            Error::Conflict { message } => ApiError::BadRequest(message),
            Error::Auth { message, error_type } => match error_type {
                AuthErrorType::MissingToken => ApiError::Unauthorized(message),
                AuthErrorType::InvalidCredentials
                | AuthErrorType::InvalidToken
                | AuthErrorType::ExpiredToken => ApiError::BadRequest(message),
            },
            Error::NotFound { .. } => ApiError::NotFound(
                "Expense not found or you do not have permission to modify it.".to_string(),
            ),
            Error::Database { context, .. } => ApiError::Internal(context),
            Error::Config(msg) | Error::Internal(msg) => ApiError::Internal(msg),
            Error::Io(err) => ApiError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_maps_to_bad_request() {
        let api: ApiError = Error::conflict("Username already taken.").into();
        assert_eq!(api.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_token_maps_to_unauthorized() {
        let api: ApiError =
            Error::auth("Access denied. No token provided.", AuthErrorType::MissingToken).into();
        assert_eq!(api.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn expired_token_maps_to_bad_request() {
        let api: ApiError = Error::auth("Token has expired.", AuthErrorType::ExpiredToken).into();
        assert_eq!(api.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let api: ApiError = Error::not_found("expense", "abc").into();
        assert_eq!(api.status_code(), StatusCode::NOT_FOUND);
    }
}
