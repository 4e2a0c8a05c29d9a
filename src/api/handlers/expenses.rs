//! Expense CRUD endpoints, all behind the auth middleware.
//!
//! The acting identity comes exclusively from the [`AuthContext`] the
//! middleware attached; request bodies are deserialized into types with no
//! owner field, so a forged `ownerId` in a payload is silently dropped.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::api::extract::Json;
use crate::api::routes::ApiState;
use crate::auth::models::AuthContext;
use crate::domain::{Expense, ExpenseId};
use crate::services::{CreateExpenseInput, UpdateExpenseInput};

use super::MessageResponse;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseBody {
    pub description: String,
    pub amount: f64,
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExpenseBody {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseResponse {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: String,
    pub owner_id: String,
}

impl From<Expense> for ExpenseResponse {
    fn from(value: Expense) -> Self {
        Self {
            id: value.id.into_string(),
            description: value.description,
            amount: value.amount,
            date: value.date,
            category: value.category,
            owner_id: value.owner_id.into_string(),
        }
    }
}

/// List the caller's expenses.
#[utoipa::path(
    get,
    path = "/api/expenses",
    responses(
        (status = 200, description = "Expenses owned by the caller", body = [ExpenseResponse]),
        (status = 401, description = "Missing bearer token", body = MessageResponse),
        (status = 400, description = "Invalid or expired token", body = MessageResponse)
    ),
    security(("bearer_token" = [])),
    tag = "expenses"
)]
pub async fn list_expenses_handler(
    State(state): State<ApiState>,
    Extension(context): Extension<AuthContext>,
) -> Result<Json<Vec<ExpenseResponse>>, ApiError> {
    let expenses = state.expense_service.list(&context.user_id).await.map_err(ApiError::from)?;
    Ok(Json(expenses.into_iter().map(ExpenseResponse::from).collect()))
}

/// Create an expense owned by the caller.
#[utoipa::path(
    post,
    path = "/api/expenses",
    request_body = CreateExpenseBody,
    responses(
        (status = 201, description = "Expense created", body = ExpenseResponse),
        (status = 400, description = "Invalid fields", body = MessageResponse)
    ),
    security(("bearer_token" = [])),
    tag = "expenses"
)]
pub async fn create_expense_handler(
    State(state): State<ApiState>,
    Extension(context): Extension<AuthContext>,
    Json(payload): Json<CreateExpenseBody>,
) -> Result<(StatusCode, Json<ExpenseResponse>), ApiError> {
    let created = state
        .expense_service
        .create(
            &context.user_id,
            CreateExpenseInput {
                description: payload.description,
                amount: payload.amount,
                date: payload.date,
                category: payload.category,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(ExpenseResponse::from(created))))
}

/// Update one of the caller's expenses.
#[utoipa::path(
    put,
    path = "/api/expenses/{id}",
    params(("id" = String, Path, description = "Expense id")),
    request_body = UpdateExpenseBody,
    responses(
        (status = 200, description = "Updated expense", body = ExpenseResponse),
        (status = 404, description = "No such expense for this owner", body = MessageResponse)
    ),
    security(("bearer_token" = [])),
    tag = "expenses"
)]
pub async fn update_expense_handler(
    State(state): State<ApiState>,
    Extension(context): Extension<AuthContext>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateExpenseBody>,
) -> Result<Json<ExpenseResponse>, ApiError> {
    let id = ExpenseId::from_str_unchecked(&id);
    let updated = state
        .expense_service
        .update(
            &context.user_id,
            &id,
            UpdateExpenseInput {
                description: payload.description,
                amount: payload.amount,
                date: payload.date,
                category: payload.category,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ExpenseResponse::from(updated)))
}

/// Delete one of the caller's expenses.
#[utoipa::path(
    delete,
    path = "/api/expenses/{id}",
    params(("id" = String, Path, description = "Expense id")),
    responses(
        (status = 200, description = "Expense deleted", body = MessageResponse),
        (status = 404, description = "No such expense for this owner", body = MessageResponse)
    ),
    security(("bearer_token" = [])),
    tag = "expenses"
)]
pub async fn delete_expense_handler(
    State(state): State<ApiState>,
    Extension(context): Extension<AuthContext>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = ExpenseId::from_str_unchecked(&id);
    state.expense_service.delete(&context.user_id, &id).await.map_err(ApiError::from)?;
    Ok(Json(MessageResponse::new("Deleted Expense")))
}
