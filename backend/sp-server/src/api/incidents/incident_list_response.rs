use sp_core::IncidentDetail;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct IncidentListResponse {
    pub incidents: Vec<IncidentDetail>,
}
