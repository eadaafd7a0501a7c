//! Health check handler

use axum::{extract::State, response::IntoResponse, Json};

use crate::AppState;

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    // Check database connectivity
    let db_status = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => "connected",
        Err(_) => "disconnected",
    };

    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "database": db_status,
    }))
}
