//! Request handlers for the HTTP API.

pub mod auth;
pub mod expenses;
pub mod health;

use serde::Serialize;
use utoipa::ToSchema;

/// Generic `{message}` response body used by register and delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into() }
    }
}
