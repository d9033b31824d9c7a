//! Service REST API handlers

use crate::api::notify::publish;
use crate::{
    ApiResult, DeleteResponse, ServerState, ServiceListResponse, ServiceRequest, ServiceResponse,
    Staff,
};

use sp_ws::EventKind;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/services
pub async fn list_services(
    State(state): State<ServerState>,
    Staff(ctx): Staff,
) -> ApiResult<Json<ServiceListResponse>> {
    let services = state.store.list_services(&ctx.org_id).await;
    Ok(Json(ServiceListResponse { services }))
}

/// GET /api/services/{id}
pub async fn get_service(
    State(state): State<ServerState>,
    Staff(ctx): Staff,
    Path(id): Path<String>,
) -> ApiResult<Json<ServiceResponse>> {
    let service = state.store.get_service(&ctx.org_id, &id).await?;
    Ok(Json(ServiceResponse { service }))
}

/// POST /api/services
///
/// Broadcasts SERVICE_UPDATED with the new service
pub async fn create_service(
    State(state): State<ServerState>,
    Staff(ctx): Staff,
    Json(req): Json<ServiceRequest>,
) -> ApiResult<(StatusCode, Json<ServiceResponse>)> {
    let (name, status) = req.validate()?;

    let service = state.store.create_service(&ctx.org_id, name, status).await;
    publish(&state, &ctx.org_id, EventKind::ServiceUpdated, &service).await;

    Ok((StatusCode::CREATED, Json(ServiceResponse { service })))
}

/// PUT /api/services/{id}
///
/// Broadcasts SERVICE_UPDATED with the updated service
pub async fn update_service(
    State(state): State<ServerState>,
    Staff(ctx): Staff,
    Path(id): Path<String>,
    Json(req): Json<ServiceRequest>,
) -> ApiResult<Json<ServiceResponse>> {
    let (name, status) = req.validate()?;

    let service = state
        .store
        .update_service(&ctx.org_id, &id, name, status)
        .await?;
    publish(&state, &ctx.org_id, EventKind::ServiceUpdated, &service).await;

    Ok(Json(ServiceResponse { service }))
}

/// DELETE /api/services/{id}
pub async fn delete_service(
    State(state): State<ServerState>,
    Staff(ctx): Staff,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    state.store.delete_service(&ctx.org_id, &id).await?;
    Ok(Json(DeleteResponse::new("Service")))
}
