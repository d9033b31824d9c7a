pub mod add_update_request;
pub mod incident_list_response;
pub mod incident_request;
pub mod incident_response;
#[allow(clippy::module_inception)]
pub mod incidents;
pub mod update_response;
