//! Incident REST API handlers
//!
//! Every successful mutation except delete is pushed to the organization's
//! connected dashboards once the store has committed it.

use crate::api::notify::publish;
use crate::{
    AddUpdateRequest, ApiResult, DeleteResponse, IncidentListResponse, IncidentRequest,
    IncidentResponse, ServerState, Staff, UpdateResponse,
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

/// GET /api/incidents
pub async fn list_incidents(
    State(state): State<ServerState>,
    Staff(ctx): Staff,
) -> ApiResult<Json<IncidentListResponse>> {
    let incidents = state.store.list_incidents(&ctx.org_id).await;
    Ok(Json(IncidentListResponse { incidents }))
}

/// GET /api/incidents/{id}
pub async fn get_incident(
    State(state): State<ServerState>,
    Staff(ctx): Staff,
    Path(id): Path<String>,
) -> ApiResult<Json<IncidentResponse>> {
    let incident = state.store.get_incident(&ctx.org_id, &id).await?;
    Ok(Json(IncidentResponse { incident }))
}

/// POST /api/incidents
///
/// Records the first "Incident reported" update and broadcasts INCIDENT_CREATED
pub async fn create_incident(
    State(state): State<ServerState>,
    Staff(ctx): Staff,
    Json(req): Json<IncidentRequest>,
) -> ApiResult<(StatusCode, Json<IncidentResponse>)> {
    let valid = req.validate()?;

    let incident = state
        .store
        .create_incident(
            &ctx.org_id,
            valid.title,
            valid.description,
            valid.status,
            &req.service_ids,
        )
        .await?;
    publish(&state, &ctx.org_id, EventKind::IncidentCreated, &incident).await;

    Ok((StatusCode::CREATED, Json(IncidentResponse { incident })))
}

/// PUT /api/incidents/{id}
///
/// Replaces title, description, status and affected services; broadcasts INCIDENT_UPDATED
pub async fn update_incident(
    State(state): State<ServerState>,
    Staff(ctx): Staff,
    Path(id): Path<String>,
    Json(req): Json<IncidentRequest>,
) -> ApiResult<Json<IncidentResponse>> {
    let valid = req.validate()?;

    let incident = state
        .store
        .update_incident(
            &ctx.org_id,
            &id,
            valid.title,
            valid.description,
            valid.status,
            &req.service_ids,
        )
        .await?;
    publish(&state, &ctx.org_id, EventKind::IncidentUpdated, &incident).await;

    Ok(Json(IncidentResponse { incident }))
}

/// DELETE /api/incidents/{id}
pub async fn delete_incident(
    State(state): State<ServerState>,
    Staff(ctx): Staff,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    state.store.delete_incident(&ctx.org_id, &id).await?;
    Ok(Json(DeleteResponse::new("Incident")))
}

/// POST /api/incidents/{id}/updates
///
/// Broadcasts UPDATE_ADDED with the new timeline entry
pub async fn add_incident_update(
    State(state): State<ServerState>,
    Staff(ctx): Staff,
    Path(id): Path<String>,
    Json(req): Json<AddUpdateRequest>,
) -> ApiResult<(StatusCode, Json<UpdateResponse>)> {
    let message = req.validate()?;

    let update = state.store.add_update(&ctx.org_id, &id, message).await?;
    publish(&state, &ctx.org_id, EventKind::UpdateAdded, &update).await;

    Ok((StatusCode::CREATED, Json(UpdateResponse { update })))
}
