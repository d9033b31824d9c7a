mod incident_status;
mod service;
mod service_status;
