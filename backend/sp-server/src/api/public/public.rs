//! Unauthenticated status page endpoints

use crate::api::validation::require_org_id;
use crate::{
    ApiResult, PublicIncidentDto, PublicIncidentListResponse, ServerState, ServiceListResponse,
};

use axum::{
    Json,
    extract::{Path, State},
};

/// GET /api/public/{org_id}/services
pub async fn list_public_services(
    State(state): State<ServerState>,
    Path(org_id): Path<String>,
) -> ApiResult<Json<ServiceListResponse>> {
    let org_id = require_org_id(&org_id)?;
    let services = state.store.list_services(org_id).await;
    Ok(Json(ServiceListResponse { services }))
}

/// GET /api/public/{org_id}/incidents
///
/// Active (non-resolved) incidents, newest first
pub async fn list_public_incidents(
    State(state): State<ServerState>,
    Path(org_id): Path<String>,
) -> ApiResult<Json<PublicIncidentListResponse>> {
    let org_id = require_org_id(&org_id)?;
    let incidents = state
        .store
        .active_incidents(org_id)
        .await
        .into_iter()
        .map(PublicIncidentDto::from)
        .collect();
    Ok(Json(PublicIncidentListResponse { incidents }))
}
