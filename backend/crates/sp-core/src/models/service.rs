use crate::ServiceStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A monitored service belonging to one organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub status: ServiceStatus,
    pub org_id: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Service {
    pub fn new(org_id: impl Into<String>, name: impl Into<String>, status: ServiceStatus) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            status,
            org_id: org_id.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a full replacement of the mutable fields and bump `updated_at`
    pub fn apply(&mut self, name: String, status: ServiceStatus) {
        self.name = name;
        self.status = status;
        self.updated_at = Utc::now();
    }
}
