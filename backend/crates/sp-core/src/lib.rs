pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::incident::Incident;
pub use models::incident_detail::IncidentDetail;
pub use models::incident_status::IncidentStatus;
pub use models::incident_update::IncidentUpdate;
pub use models::service::Service;
pub use models::service_status::ServiceStatus;

#[cfg(test)]
mod tests;
