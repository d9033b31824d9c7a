use crate::IncidentStatus;

use std::str::FromStr;

#[test]
fn test_incident_status_round_trips_through_as_str() {
    for status in [
        IncidentStatus::Investigating,
        IncidentStatus::Identified,
        IncidentStatus::Monitoring,
        IncidentStatus::Resolved,
    ] {
        assert_eq!(IncidentStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_incident_status_rejects_unknown() {
    assert!(IncidentStatus::from_str("Closed").is_err());
}

#[test]
fn test_only_resolved_is_inactive() {
    assert!(IncidentStatus::Investigating.is_active());
    assert!(IncidentStatus::Monitoring.is_active());
    assert!(!IncidentStatus::Resolved.is_active());
}
