use sp_core::Service;

use serde::Serialize;

/// Single service response
#[derive(Debug, Serialize)]
pub struct ServiceResponse {
    pub service: Service,
}
