use crate::{Incident, IncidentUpdate, Service};

use serde::{Deserialize, Serialize};

/// An incident together with the services it affects and its timeline.
/// This is the full current state pushed to dashboards on incident events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentDetail {
    pub incident: Incident,
    pub services: Vec<Service>,
    pub updates: Vec<IncidentUpdate>,
}
