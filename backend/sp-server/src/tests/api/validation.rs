use crate::api::validation::{require_non_blank, require_org_id};
use crate::{ApiError, IncidentRequest, ServiceRequest};

use sp_core::{IncidentStatus, ServiceStatus};

#[test]
fn given_padded_value_when_required_then_trimmed() {
    assert_eq!(require_non_blank("  API  ", "name").unwrap(), "API");
}

#[test]
fn given_whitespace_when_required_then_validation_error_names_field() {
    let error = require_non_blank("   ", "title").unwrap_err();
    assert!(matches!(
        error,
        ApiError::Validation { field: Some(ref f), .. } if f == "title"
    ));
}

#[test]
fn given_blank_org_id_when_checked_then_bad_request() {
    assert!(matches!(
        require_org_id(" "),
        Err(ApiError::BadRequest { .. })
    ));
    assert_eq!(require_org_id("org-1").unwrap(), "org-1");
}

#[test]
fn given_service_request_when_validated_then_status_parsed() {
    let request = ServiceRequest {
        name: "Website".into(),
        status: "Degraded".into(),
    };

    let (name, status) = request.validate().unwrap();

    assert_eq!(name, "Website");
    assert_eq!(status, ServiceStatus::Degraded);
}

#[test]
fn given_lowercase_status_when_validated_then_rejected() {
    let request = ServiceRequest {
        name: "Website".into(),
        status: "degraded".into(),
    };

    assert!(request.validate().is_err());
}

#[test]
fn given_incident_request_json_when_deserialized_then_camel_case_service_ids() {
    let request: IncidentRequest = serde_json::from_str(
        r#"{"title":"Outage","status":"Investigating","serviceIds":["s1","s2"]}"#,
    )
    .unwrap();

    let valid = request.validate().unwrap();

    assert_eq!(request.service_ids, vec!["s1", "s2"]);
    assert_eq!(valid.description, "");
    assert_eq!(valid.status, IncidentStatus::Investigating);
}
