use crate::ApiResult;
use crate::api::validation::require_non_blank;

use sp_core::IncidentStatus;

use serde::Deserialize;

/// Body of POST /api/incidents and PUT /api/incidents/{id}
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// One of "Investigating", "Identified", "Monitoring", "Resolved"
    pub status: String,
    /// Affected services, all owned by the caller's organization
    #[serde(default)]
    pub service_ids: Vec<String>,
}

/// Request fields after validation
pub struct ValidIncident {
    pub title: String,
    pub description: String,
    pub status: IncidentStatus,
}

impl IncidentRequest {
    pub fn validate(&self) -> ApiResult<ValidIncident> {
        Ok(ValidIncident {
            title: require_non_blank(&self.title, "title")?,
            description: self.description.trim().to_string(),
            status: self.status.parse::<IncidentStatus>()?,
        })
    }
}
