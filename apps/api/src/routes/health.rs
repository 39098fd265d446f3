use axum::Json;
use serde_json::{json, Value};

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "JobWiz AI Resume Analyzer API"
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "JobWiz AI Resume Analyzer",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
