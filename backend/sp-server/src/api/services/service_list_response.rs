use sp_core::Service;

use serde::Serialize;

/// List of services response
#[derive(Debug, Serialize)]
pub struct ServiceListResponse {
    pub services: Vec<Service>,
}
