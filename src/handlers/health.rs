use axum::Json;
use serde_json::{json, Value};

/// Liveness probe. The body never changes while the process is up.
pub async fn check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
