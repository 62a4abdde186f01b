use axum::Json;
use serde_json::{json, Value};

/// Health check endpoint
///
/// Also the target of the keep-alive ping that stops the hosting platform
/// from idling the process out.
pub async fn health_check() -> Json<Value> {
    Json(json!({ "success": true }))
}
