use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A timeline entry posted against an incident
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentUpdate {
    pub id: String,
    pub message: String,
    pub incident_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IncidentUpdate {
    /// Message recorded automatically when an incident is opened
    pub const INITIAL_MESSAGE: &'static str = "Incident reported";

    pub fn new(incident_id: impl Into<String>, message: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            message: message.into(),
            incident_id: incident_id.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
