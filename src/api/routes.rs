//! Router assembly.
//!
//! Auth routes are reachable without credentials; everything under
//! `/api/expenses` sits behind the authentication middleware.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::jwt::TokenIssuer;
use crate::auth::middleware::authenticate;
use crate::auth::AuthService;
use crate::services::ExpenseService;
use crate::storage::DbPool;

use super::docs;
use super::handlers::{
    auth::{login_handler, register_handler},
    expenses::{
        create_expense_handler, delete_expense_handler, list_expenses_handler,
        update_expense_handler,
    },
    health::health_handler,
};

#[derive(Clone)]
pub struct ApiState {
    pub auth_service: AuthService,
    pub expense_service: ExpenseService,
}

pub fn build_router(pool: DbPool, issuer: Arc<TokenIssuer>) -> Router {
    let state = ApiState {
        auth_service: AuthService::with_sqlx(pool.clone(), issuer.clone()),
        expense_service: ExpenseService::with_sqlx(pool),
    };

    let auth_layer = middleware::from_fn_with_state(issuer, authenticate);

    let expense_routes = Router::new()
        .route("/api/expenses", get(list_expenses_handler))
        .route("/api/expenses", post(create_expense_handler))
        .route("/api/expenses/{id}", put(update_expense_handler))
        .route("/api/expenses/{id}", delete(delete_expense_handler))
        .layer(auth_layer);

    let public_routes = Router::new()
        .route("/api/auth/register", post(register_handler))
        .route("/api/auth/login", post(login_handler))
        .route("/health", get(health_handler));

    Router::new()
        .merge(expense_routes)
        .merge(public_routes)
        .with_state(state)
        .merge(docs::docs_router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
