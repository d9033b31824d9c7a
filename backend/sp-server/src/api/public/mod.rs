#[allow(clippy::module_inception)]
pub mod public;
pub mod public_incident_dto;
pub mod public_incident_list_response;
