use crate::{CoreError, ServiceStatus};

use std::str::FromStr;

#[test]
fn test_service_status_as_str() {
    assert_eq!(ServiceStatus::Operational.as_str(), "Operational");
    assert_eq!(ServiceStatus::Degraded.as_str(), "Degraded");
    assert_eq!(ServiceStatus::Outage.as_str(), "Outage");
}

#[test]
fn test_service_status_from_str() {
    assert_eq!(
        ServiceStatus::from_str("Outage").unwrap(),
        ServiceStatus::Outage
    );
    assert!(matches!(
        ServiceStatus::from_str("outage"),
        Err(CoreError::InvalidServiceStatus { .. })
    ));
    assert!(ServiceStatus::from_str("").is_err());
}

#[test]
fn test_service_status_serializes_as_display_name() {
    let json = serde_json::to_string(&ServiceStatus::Degraded).unwrap();
    assert_eq!(json, "\"Degraded\"");
}

#[test]
fn test_service_status_default() {
    assert_eq!(ServiceStatus::default(), ServiceStatus::Operational);
}
