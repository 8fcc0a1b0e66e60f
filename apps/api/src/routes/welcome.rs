use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Fixed welcome message, independent of all other system state.
pub async fn welcome_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Resume Generator API!"
    }))
}
