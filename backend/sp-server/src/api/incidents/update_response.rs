use sp_core::IncidentUpdate;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub update: IncidentUpdate,
}
