//! Identity models shared across the auth stack.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::UserId;

/// A registered user identity. The password hash never leaves the storage
/// layer; this type deliberately has no field for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Input for persisting a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
}

/// The verified identity attached to a request by the auth middleware.
///
/// Handlers and services accept this (or the [`UserId`] inside it) as the sole
/// source of ownership; nothing in a request body is ever trusted for
/// identity.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: UserId,
}

impl AuthContext {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}
