use crate::ApiResult;
use crate::api::validation::require_non_blank;

use serde::Deserialize;

/// Body of POST /api/incidents/{id}/updates
#[derive(Debug, Deserialize)]
pub struct AddUpdateRequest {
    pub message: String,
}

impl AddUpdateRequest {
    pub fn validate(&self) -> ApiResult<String> {
        require_non_blank(&self.message, "message")
    }
}
