use crate::ServerState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Component status
pub async fn health_check(State(state): State<ServerState>) -> Response {
    let registry = &state.ws.registry;
    let shutting_down = state.ws.shutdown.is_shutdown();

    let health = json!({
        "status": if shutting_down { "shutting_down" } else { "healthy" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "websocket": {
                "connections": registry.total_count().await,
                "organizations": registry.active_tenants().await.len(),
                "maxConnections": registry.limits().max_total,
            },
            "auth": if state.jwt_validator.is_some() { "enabled" } else { "disabled" },
            "store": "in_memory",
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness check (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness check; not ready once shutdown has begun
pub async fn readiness_check(State(state): State<ServerState>) -> Response {
    if state.ws.shutdown.is_shutdown() {
        return (StatusCode::SERVICE_UNAVAILABLE, "Shutting down").into_response();
    }
    (StatusCode::OK, "Ready").into_response()
}
