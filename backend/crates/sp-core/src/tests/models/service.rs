use crate::{Service, ServiceStatus};

#[test]
fn given_new_service_when_serialized_then_uses_camel_case_keys() {
    let service = Service::new("org-1", "API", ServiceStatus::Operational);

    let json = serde_json::to_value(&service).unwrap();

    assert_eq!(json["orgId"], "org-1");
    assert_eq!(json["name"], "API");
    assert_eq!(json["status"], "Operational");
    assert!(json.get("createdAt").is_some());
    assert!(json.get("org_id").is_none());
}

#[test]
fn given_service_when_apply_then_fields_replaced_and_updated_at_advances() {
    let mut service = Service::new("org-1", "API", ServiceStatus::Operational);
    let created_at = service.created_at;

    service.apply("Public API".to_string(), ServiceStatus::Outage);

    assert_eq!(service.name, "Public API");
    assert_eq!(service.status, ServiceStatus::Outage);
    assert_eq!(service.created_at, created_at);
    assert!(service.updated_at >= created_at);
}
