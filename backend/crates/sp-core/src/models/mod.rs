pub mod incident;
pub mod incident_detail;
pub mod incident_status;
pub mod incident_update;
pub mod service;
pub mod service_status;
