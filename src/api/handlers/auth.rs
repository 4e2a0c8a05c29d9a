//! Registration and login endpoints. These are the only unguarded routes
//! besides the health and docs endpoints.

use axum::{extract::State, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::api::extract::Json;
use crate::api::routes::ApiState;
use crate::auth::validation::{LoginRequest, RegisterRequest};

use super::MessageResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub message: String,
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = MessageResponse),
        (status = 400, description = "Invalid input or username taken", body = MessageResponse)
    ),
    tag = "auth"
)]
pub async fn register_handler(
    State(state): State<ApiState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state.auth_service.register(&payload).await.map_err(ApiError::from)?;
    Ok((StatusCode::CREATED, Json(MessageResponse::new("User registered successfully!"))))
}

/// Log in and receive a bearer token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login succeeded", body = LoginResponse),
        (status = 400, description = "Invalid credentials", body = MessageResponse)
    ),
    tag = "auth"
)]
pub async fn login_handler(
    State(state): State<ApiState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let token = state.auth_service.login(&payload).await.map_err(ApiError::from)?;
    Ok(Json(LoginResponse { token, message: "Login successful!".to_string() }))
}
