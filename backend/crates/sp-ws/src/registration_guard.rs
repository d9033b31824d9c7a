use crate::{ConnectionId, ConnectionRegistry};

use log::warn;

/// Keeps a connection's registry entry tied to the lifetime of its task.
///
/// Call [`release`](RegistrationGuard::release) on the normal exit path. If the
/// guard is dropped without it (panic, task cancelled) the unregister is
/// spawned onto the current runtime instead.
pub struct RegistrationGuard {
    registry: ConnectionRegistry,
    tenant_id: String,
    connection_id: ConnectionId,
    released: bool,
}

impl RegistrationGuard {
    pub fn new(
        registry: ConnectionRegistry,
        tenant_id: impl Into<String>,
        connection_id: ConnectionId,
    ) -> Self {
        Self {
            registry,
            tenant_id: tenant_id.into(),
            connection_id,
            released: false,
        }
    }

    pub async fn release(mut self) {
        self.released = true;
        self.registry
            .unregister(&self.tenant_id, self.connection_id)
            .await;
    }
}

impl Drop for RegistrationGuard {
    fn drop(&mut self) {
        if self.released {
            return;
        }

        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                let registry = self.registry.clone();
                let tenant_id = std::mem::take(&mut self.tenant_id);
                let connection_id = self.connection_id;
                runtime.spawn(async move {
                    registry.unregister(&tenant_id, connection_id).await;
                });
            }
            Err(_) => warn!(
                "Connection {} dropped outside a runtime, registry entry for tenant {} left behind",
                self.connection_id, self.tenant_id
            ),
        }
    }
}
