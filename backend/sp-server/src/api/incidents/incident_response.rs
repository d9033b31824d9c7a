use sp_core::IncidentDetail;

use serde::Serialize;

/// Single incident with its services and timeline
#[derive(Debug, Serialize)]
pub struct IncidentResponse {
    pub incident: IncidentDetail,
}
