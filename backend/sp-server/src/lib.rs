pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;

pub use api::{
    delete_response::DeleteResponse,
    error::{ApiError, Result as ApiResult},
    extractors::staff::Staff,
    incidents::{
        add_update_request::AddUpdateRequest,
        incident_list_response::IncidentListResponse,
        incident_request::IncidentRequest,
        incident_response::IncidentResponse,
        incidents::{
            add_incident_update, create_incident, delete_incident, get_incident, list_incidents,
            update_incident,
        },
        update_response::UpdateResponse,
    },
    public::{
        public::{list_public_incidents, list_public_services},
        public_incident_dto::PublicIncidentDto,
        public_incident_list_response::PublicIncidentListResponse,
    },
    services::{
        service_list_response::ServiceListResponse,
        service_request::ServiceRequest,
        service_response::ServiceResponse,
        services::{create_service, delete_service, get_service, list_services, update_service},
    },
};
pub use error::{Result as ServerResult, ServerError};
pub use routes::build_router;
pub use state::ServerState;
pub use store::{StatusStore, StoreError};
