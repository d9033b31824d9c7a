use serde::{Deserialize, Serialize};

/// What changed. Serialized on the wire in SCREAMING_SNAKE_CASE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    ServiceUpdated,
    IncidentCreated,
    IncidentUpdated,
    UpdateAdded,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        Self::ServiceUpdated,
        Self::IncidentCreated,
        Self::IncidentUpdated,
        Self::UpdateAdded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ServiceUpdated => "SERVICE_UPDATED",
            Self::IncidentCreated => "INCIDENT_CREATED",
            Self::IncidentUpdated => "INCIDENT_UPDATED",
            Self::UpdateAdded => "UPDATE_ADDED",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
