//! Liveness probe.

use axum::Json;
use serde_json::{json, Value};

/// Report service liveness.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is alive")),
    tag = "health"
)]
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok", "version": crate::VERSION }))
}
