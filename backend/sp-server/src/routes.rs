use crate::{
    ServerState, add_incident_update, create_incident, create_service, delete_incident,
    delete_service, get_incident, get_service, health, list_incidents, list_public_incidents,
    list_public_services, list_services, metrics, update_incident, update_service,
};

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        // Real-time endpoint (public)
        .route("/api/ws/{org_id}", get(sp_ws::handler))
        .route("/api/ws", get(missing_org_id))
        .route("/api/ws/", get(missing_org_id))
        // Public status page
        .route("/api/public/{org_id}/services", get(list_public_services))
        .route("/api/public/{org_id}/incidents", get(list_public_incidents))
        // Staff API
        .route("/api/services", get(list_services).post(create_service))
        .route(
            "/api/services/{id}",
            get(get_service).put(update_service).delete(delete_service),
        )
        .route("/api/incidents", get(list_incidents).post(create_incident))
        .route(
            "/api/incidents/{id}",
            get(get_incident).put(update_incident).delete(delete_incident),
        )
        .route("/api/incidents/{id}/updates", post(add_incident_update))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(metrics::render))
        .with_state(state)
        // CORS middleware (dashboards are served from other origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn missing_org_id() -> (StatusCode, &'static str) {
    (StatusCode::BAD_REQUEST, "Organization ID is required")
}
