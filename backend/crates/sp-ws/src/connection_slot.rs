use crate::{ConnectionHandle, ConnectionRegistry};

use log::warn;

/// Capacity reserved for one connection between admission and registration.
///
/// Consumed by [`register`](ConnectionSlot::register). Dropping an unused slot
/// (failed upgrade, task cancelled) returns the capacity to the registry.
pub struct ConnectionSlot {
    registry: ConnectionRegistry,
    tenant_id: String,
    consumed: bool,
}

impl ConnectionSlot {
    pub(crate) fn new(registry: ConnectionRegistry, tenant_id: impl Into<String>) -> Self {
        Self {
            registry,
            tenant_id: tenant_id.into(),
            consumed: false,
        }
    }

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    /// Register the connection under the reserved tenant
    pub async fn register(mut self, connection: ConnectionHandle) {
        self.consumed = true;
        self.registry
            .register_reserved(&self.tenant_id, connection)
            .await;
    }
}

impl Drop for ConnectionSlot {
    fn drop(&mut self) {
        if self.consumed || self.registry.try_release_slot(&self.tenant_id) {
            return;
        }

        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                let registry = self.registry.clone();
                let tenant_id = std::mem::take(&mut self.tenant_id);
                runtime.spawn(async move {
                    registry.release_slot(&tenant_id).await;
                });
            }
            Err(_) => warn!(
                "Connection slot for tenant {} dropped outside a runtime and not returned",
                self.tenant_id
            ),
        }
    }
}
