use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Fixed payload describing the service and its endpoints. No side effects.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "message": "Product Content Generator API",
        "status": "running",
        "endpoints": {
            "generate": "/generate (POST)",
            "health": "/ (GET)"
        }
    }))
}
