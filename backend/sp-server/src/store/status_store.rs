use crate::store::{StoreError, StoreResult};

use sp_core::{
    Incident, IncidentDetail, IncidentStatus, IncidentUpdate, Service, ServiceStatus,
};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::info;
use tokio::sync::RwLock;

/// In-memory status data partitioned by organization.
///
/// Every mutation completes under the write lock and returns the committed
/// state, so callers can broadcast it after the lock has been released.
#[derive(Clone, Default)]
pub struct StatusStore {
    inner: Arc<RwLock<HashMap<String, OrgPartition>>>,
}

#[derive(Default)]
struct OrgPartition {
    services: Vec<Service>,
    incidents: Vec<IncidentRecord>,
}

struct IncidentRecord {
    incident: Incident,
    service_ids: Vec<String>,
    updates: Vec<IncidentUpdate>,
}

impl OrgPartition {
    fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    fn record(&self, id: &str) -> Option<&IncidentRecord> {
        self.incidents.iter().find(|r| r.incident.id == id)
    }

    fn detail(&self, record: &IncidentRecord) -> IncidentDetail {
        IncidentDetail {
            incident: record.incident.clone(),
            services: record
                .service_ids
                .iter()
                .filter_map(|id| self.service(id).cloned())
                .collect(),
            updates: record.updates.clone(),
        }
    }

    /// De-duplicated ids, or the ids that are not services of this organization
    #[track_caller]
    fn resolve_service_ids(&self, ids: &[String]) -> StoreResult<Vec<String>> {
        let unknown: Vec<String> = ids
            .iter()
            .filter(|id| self.service(id).is_none())
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(StoreError::UnknownServices {
                ids: unknown,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut resolved: Vec<String> = Vec::with_capacity(ids.len());
        for id in ids {
            if !resolved.contains(id) {
                resolved.push(id.clone());
            }
        }
        Ok(resolved)
    }
}

#[track_caller]
fn not_found(entity: &'static str, id: &str) -> StoreError {
    StoreError::NotFound {
        entity,
        id: id.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

impl StatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Services
    // =========================================================================

    pub async fn list_services(&self, org_id: &str) -> Vec<Service> {
        let inner = self.inner.read().await;
        inner
            .get(org_id)
            .map(|org| org.services.clone())
            .unwrap_or_default()
    }

    pub async fn get_service(&self, org_id: &str, id: &str) -> StoreResult<Service> {
        let inner = self.inner.read().await;
        inner
            .get(org_id)
            .and_then(|org| org.service(id))
            .cloned()
            .ok_or_else(|| not_found("Service", id))
    }

    pub async fn create_service(&self, org_id: &str, name: String, status: ServiceStatus) -> Service {
        let service = Service::new(org_id, name, status);

        let mut inner = self.inner.write().await;
        inner
            .entry(org_id.to_string())
            .or_default()
            .services
            .push(service.clone());

        info!("Created service {} for org {}", service.id, org_id);
        service
    }

    pub async fn update_service(
        &self,
        org_id: &str,
        id: &str,
        name: String,
        status: ServiceStatus,
    ) -> StoreResult<Service> {
        let mut inner = self.inner.write().await;
        let service = inner
            .get_mut(org_id)
            .and_then(|org| org.services.iter_mut().find(|s| s.id == id))
            .ok_or_else(|| not_found("Service", id))?;

        service.apply(name, status);
        info!("Updated service {} for org {} ({})", id, org_id, status);
        Ok(service.clone())
    }

    /// Removes the service and its links from this organization's incidents
    pub async fn delete_service(&self, org_id: &str, id: &str) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        let org = inner
            .get_mut(org_id)
            .ok_or_else(|| not_found("Service", id))?;

        let index = org
            .services
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| not_found("Service", id))?;
        org.services.remove(index);

        for record in org.incidents.iter_mut() {
            record.service_ids.retain(|service_id| service_id != id);
        }

        info!("Deleted service {} for org {}", id, org_id);
        Ok(())
    }

    // =========================================================================
    // Incidents
    // =========================================================================

    pub async fn list_incidents(&self, org_id: &str) -> Vec<IncidentDetail> {
        let inner = self.inner.read().await;
        inner
            .get(org_id)
            .map(|org| org.incidents.iter().map(|r| org.detail(r)).collect())
            .unwrap_or_default()
    }

    /// Non-resolved incidents, newest first
    pub async fn active_incidents(&self, org_id: &str) -> Vec<IncidentDetail> {
        let inner = self.inner.read().await;
        let Some(org) = inner.get(org_id) else {
            return Vec::new();
        };

        let mut active: Vec<IncidentDetail> = org
            .incidents
            .iter()
            .rev()
            .filter(|r| r.incident.status.is_active())
            .map(|r| org.detail(r))
            .collect();
        active.sort_by(|a, b| b.incident.created_at.cmp(&a.incident.created_at));
        active
    }

    pub async fn get_incident(&self, org_id: &str, id: &str) -> StoreResult<IncidentDetail> {
        let inner = self.inner.read().await;
        let org = inner.get(org_id).ok_or_else(|| not_found("Incident", id))?;
        let record = org.record(id).ok_or_else(|| not_found("Incident", id))?;
        Ok(org.detail(record))
    }

    /// Opens an incident with its first timeline entry
    pub async fn create_incident(
        &self,
        org_id: &str,
        title: String,
        description: String,
        status: IncidentStatus,
        service_ids: &[String],
    ) -> StoreResult<IncidentDetail> {
        let mut inner = self.inner.write().await;
        let org = inner.entry(org_id.to_string()).or_default();
        let service_ids = org.resolve_service_ids(service_ids)?;

        let incident = Incident::new(org_id, title, description, status);
        let first_update = IncidentUpdate::new(&incident.id, IncidentUpdate::INITIAL_MESSAGE);
        let record = IncidentRecord {
            incident,
            service_ids,
            updates: vec![first_update],
        };
        let detail = org.detail(&record);
        org.incidents.push(record);

        info!("Created incident {} for org {}", detail.incident.id, org_id);
        Ok(detail)
    }

    pub async fn update_incident(
        &self,
        org_id: &str,
        id: &str,
        title: String,
        description: String,
        status: IncidentStatus,
        service_ids: &[String],
    ) -> StoreResult<IncidentDetail> {
        let mut inner = self.inner.write().await;
        let org = inner
            .get_mut(org_id)
            .ok_or_else(|| not_found("Incident", id))?;
        if org.record(id).is_none() {
            return Err(not_found("Incident", id));
        }
        let service_ids = org.resolve_service_ids(service_ids)?;

        let index = org
            .incidents
            .iter()
            .position(|r| r.incident.id == id)
            .ok_or_else(|| not_found("Incident", id))?;
        let record = &mut org.incidents[index];
        record.incident.apply(title, description, status);
        record.service_ids = service_ids;

        info!("Updated incident {} for org {} ({})", id, org_id, status);
        Ok(org.detail(&org.incidents[index]))
    }

    pub async fn delete_incident(&self, org_id: &str, id: &str) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        let org = inner
            .get_mut(org_id)
            .ok_or_else(|| not_found("Incident", id))?;
        let index = org
            .incidents
            .iter()
            .position(|r| r.incident.id == id)
            .ok_or_else(|| not_found("Incident", id))?;
        org.incidents.remove(index);

        info!("Deleted incident {} for org {}", id, org_id);
        Ok(())
    }

    pub async fn add_update(
        &self,
        org_id: &str,
        incident_id: &str,
        message: String,
    ) -> StoreResult<IncidentUpdate> {
        let mut inner = self.inner.write().await;
        let record = inner
            .get_mut(org_id)
            .and_then(|org| {
                org.incidents
                    .iter_mut()
                    .find(|r| r.incident.id == incident_id)
            })
            .ok_or_else(|| not_found("Incident", incident_id))?;

        let update = IncidentUpdate::new(incident_id, message);
        record.updates.push(update.clone());

        info!("Added update {} to incident {}", update.id, incident_id);
        Ok(update)
    }
}
