use crate::IncidentStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: IncidentStatus,
    pub org_id: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Incident {
    pub fn new(
        org_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        status: IncidentStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            status,
            org_id: org_id.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, title: String, description: String, status: IncidentStatus) {
        self.title = title;
        self.description = description;
        self.status = status;
        self.updated_at = Utc::now();
    }
}
