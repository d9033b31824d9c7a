use crate::{ApiError, ApiResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Trimmed value of a required text field
#[track_caller]
pub fn require_non_blank(value: &str, field: &'static str) -> ApiResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation {
            message: format!("{field} is required"),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(trimmed.to_string())
}

/// Organization id taken from a public URL
#[track_caller]
pub fn require_org_id(org_id: &str) -> ApiResult<&str> {
    if org_id.trim().is_empty() {
        return Err(ApiError::BadRequest {
            message: "Organization ID is required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(org_id)
}
