use sp_core::{IncidentDetail, IncidentStatus, IncidentUpdate, Service};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Incident as shown on the public status page: flattened, timeline newest first
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicIncidentDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: IncidentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub services: Vec<Service>,
    pub updates: Vec<IncidentUpdate>,
}

impl From<IncidentDetail> for PublicIncidentDto {
    fn from(detail: IncidentDetail) -> Self {
        let mut updates = detail.updates;
        updates.reverse();
        updates.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Self {
            id: detail.incident.id,
            title: detail.incident.title,
            description: detail.incident.description,
            status: detail.incident.status,
            created_at: detail.incident.created_at,
            updated_at: detail.incident.updated_at,
            services: detail.services,
            updates,
        }
    }
}
