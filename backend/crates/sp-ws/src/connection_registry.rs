use crate::{
    ConnectionHandle, ConnectionId, ConnectionLimits, ConnectionSlot, Result as WsErrorResult,
    WsError,
};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{info, warn};
use tokio::sync::RwLock;

/// Live connections grouped by tenant.
///
/// Every connection appears in at most one tenant collection, at most once,
/// and a tenant with no connections has no entry. The lock is only held for
/// in-memory bookkeeping; callers that send take a [`snapshot`] first.
///
/// [`snapshot`]: ConnectionRegistry::snapshot
pub struct ConnectionRegistry {
    inner: Arc<RwLock<RegistryInner>>,
    limits: ConnectionLimits,
}

#[derive(Default)]
struct RegistryInner {
    tenants: HashMap<String, Vec<ConnectionHandle>>,
    owners: HashMap<ConnectionId, String>,
    /// Admitted upgrades that have not registered yet
    pending: HashMap<String, usize>,
    pending_total: usize,
}

impl RegistryInner {
    fn insert(&mut self, tenant_id: &str, connection: ConnectionHandle) {
        if let Some(owner) = self.owners.get(&connection.connection_id) {
            warn!(
                "Connection {} already registered for tenant {}, ignoring registration for {}",
                connection.connection_id, owner, tenant_id
            );
            return;
        }

        let connection_id = connection.connection_id;
        let connections = self.tenants.entry(tenant_id.to_string()).or_default();
        connections.push(connection);
        let tenant_count = connections.len();
        self.owners.insert(connection_id, tenant_id.to_string());

        info!(
            "Registered connection {} for tenant {} (tenant: {}, total: {})",
            connection_id,
            tenant_id,
            tenant_count,
            self.owners.len()
        );
    }

    fn release_pending(&mut self, tenant_id: &str) {
        let Some(count) = self.pending.get_mut(tenant_id) else {
            return;
        };
        *count -= 1;
        if *count == 0 {
            self.pending.remove(tenant_id);
        }
        self.pending_total = self.pending_total.saturating_sub(1);
    }
}

impl ConnectionRegistry {
    pub fn new(limits: ConnectionLimits) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner::default())),
            limits,
        }
    }

    pub fn limits(&self) -> &ConnectionLimits {
        &self.limits
    }

    /// Add a connection to its tenant's collection.
    ///
    /// A connection id that is already registered is left where it is.
    pub async fn register(&self, tenant_id: &str, connection: ConnectionHandle) {
        self.inner.write().await.insert(tenant_id, connection);
    }

    /// Remove a connection by identity. Absent tenant or connection is a no-op.
    pub async fn unregister(&self, tenant_id: &str, connection_id: ConnectionId) {
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;

        let Some(connections) = inner.tenants.get_mut(tenant_id) else {
            return;
        };
        let Some(index) = connections
            .iter()
            .position(|c| c.connection_id == connection_id)
        else {
            return;
        };

        connections.remove(index);
        let remaining = connections.len();
        if remaining == 0 {
            inner.tenants.remove(tenant_id);
        }
        inner.owners.remove(&connection_id);

        info!(
            "Unregistered connection {} from tenant {} (tenant: {}, total: {})",
            connection_id,
            tenant_id,
            remaining,
            inner.owners.len()
        );
    }

    /// Point-in-time copy of a tenant's connections, in registration order
    pub async fn snapshot(&self, tenant_id: &str) -> Vec<ConnectionHandle> {
        let inner = self.inner.read().await;
        inner.tenants.get(tenant_id).cloned().unwrap_or_default()
    }

    pub async fn tenant_count(&self, tenant_id: &str) -> usize {
        let inner = self.inner.read().await;
        inner.tenants.get(tenant_id).map_or(0, Vec::len)
    }

    pub async fn total_count(&self) -> usize {
        self.inner.read().await.owners.len()
    }

    pub async fn active_tenants(&self) -> Vec<String> {
        let inner = self.inner.read().await;
        let mut tenants: Vec<String> = inner.tenants.keys().cloned().collect();
        tenants.sort();
        tenants
    }

    pub async fn contains(&self, connection_id: ConnectionId) -> bool {
        self.inner.read().await.owners.contains_key(&connection_id)
    }

    /// Admission check run before a WebSocket upgrade is accepted.
    ///
    /// Registered connections and outstanding slots both count against the
    /// limits, and the check and the reservation happen under one write lock.
    pub async fn reserve(&self, tenant_id: &str) -> WsErrorResult<ConnectionSlot> {
        let mut inner = self.inner.write().await;

        let total = inner.owners.len() + inner.pending_total;
        if total >= self.limits.max_total {
            return Err(WsError::ConnectionLimitExceeded {
                current: total,
                max: self.limits.max_total,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let tenant = inner.tenants.get(tenant_id).map_or(0, Vec::len)
            + inner.pending.get(tenant_id).copied().unwrap_or(0);
        if tenant >= self.limits.max_per_tenant {
            return Err(WsError::TenantLimitExceeded {
                tenant_id: tenant_id.to_string(),
                current: tenant,
                max: self.limits.max_per_tenant,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        *inner.pending.entry(tenant_id.to_string()).or_default() += 1;
        inner.pending_total += 1;

        Ok(ConnectionSlot::new(self.clone(), tenant_id))
    }

    /// Slots held by upgrades that have not registered yet
    pub async fn pending_count(&self) -> usize {
        self.inner.read().await.pending_total
    }

    /// Turn a reserved slot into a registration
    pub(crate) async fn register_reserved(&self, tenant_id: &str, connection: ConnectionHandle) {
        let mut inner = self.inner.write().await;
        inner.release_pending(tenant_id);
        inner.insert(tenant_id, connection);
    }

    /// Give a slot back without blocking. False if the lock is busy.
    pub(crate) fn try_release_slot(&self, tenant_id: &str) -> bool {
        match self.inner.try_write() {
            Ok(mut inner) => {
                inner.release_pending(tenant_id);
                true
            }
            Err(_) => false,
        }
    }

    pub(crate) async fn release_slot(&self, tenant_id: &str) {
        self.inner.write().await.release_pending(tenant_id);
    }
}

impl Clone for ConnectionRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            limits: self.limits.clone(),
        }
    }
}
