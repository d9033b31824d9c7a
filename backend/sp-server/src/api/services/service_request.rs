use crate::ApiResult;
use crate::api::validation::require_non_blank;

use sp_core::ServiceStatus;

use serde::Deserialize;

/// Body of POST /api/services and PUT /api/services/{id}
#[derive(Debug, Deserialize)]
pub struct ServiceRequest {
    pub name: String,
    /// One of "Operational", "Degraded", "Outage"
    pub status: String,
}

impl ServiceRequest {
    pub fn validate(&self) -> ApiResult<(String, ServiceStatus)> {
        let name = require_non_blank(&self.name, "name")?;
        let status = self.status.parse::<ServiceStatus>()?;
        Ok((name, status))
    }
}
