use crate::{
    BroadcastConfig, BroadcastReport, ConnectionRegistry, EventEnvelope, EventKind, Metrics,
    MetricsTimer, Result as WsErrorResult,
};

use axum::extract::ws::Message;
use futures::future::join_all;
use log::{debug, error, warn};
use serde::Serialize;

/// Pushes change events to every live connection of one tenant.
///
/// The envelope is serialized once per call. Sends run concurrently and a
/// failing connection never affects delivery to the others, nor is it
/// unregistered here; the connection's own task owns its removal.
#[derive(Clone)]
pub struct TenantBroadcaster {
    registry: ConnectionRegistry,
    config: BroadcastConfig,
    metrics: Metrics,
}

impl TenantBroadcaster {
    pub fn new(registry: ConnectionRegistry, config: BroadcastConfig, metrics: Metrics) -> Self {
        Self {
            registry,
            config,
            metrics,
        }
    }

    /// Broadcast `{"event": event, "data": payload}` to the tenant.
    ///
    /// Resolves after every send has completed or failed. Only a payload that
    /// cannot be serialized is an error, in which case nothing is sent.
    pub async fn broadcast<T>(
        &self,
        tenant_id: &str,
        event: EventKind,
        payload: &T,
    ) -> WsErrorResult<BroadcastReport>
    where
        T: Serialize + ?Sized,
    {
        let text = match EventEnvelope::new(event, payload).encode() {
            Ok(text) => text,
            Err(e) => {
                error!("Failed to serialize {} for tenant {}: {}", event, tenant_id, e);
                self.metrics.serialization_failed(event.as_str());
                return Err(e);
            }
        };

        let connections = self.registry.snapshot(tenant_id).await;
        if connections.is_empty() {
            debug!("No subscribers for {} on tenant {}", event, tenant_id);
            return Ok(BroadcastReport::empty(tenant_id, event));
        }

        let timer = MetricsTimer::new(self.metrics.clone());
        let message = Message::Text(text);
        let send_timeout = self.config.send_timeout;

        let results = join_all(connections.iter().map(|connection| {
            let message = message.clone();
            async move { (connection, connection.send(message, send_timeout).await) }
        }))
        .await;

        let mut report = BroadcastReport::new(tenant_id, event, connections.len());
        for (connection, result) in results {
            match result {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    warn!(
                        "Failed to deliver {} to connection {} (tenant {}): {}",
                        event, connection.connection_id, tenant_id, e
                    );
                    self.metrics.send_failed(e.error_code());
                    report.failed.push(connection.connection_id);
                }
            }
        }

        let elapsed = timer.finish();
        self.metrics
            .broadcast_published(event.as_str(), report.delivered);
        debug!(
            "Broadcast {} to tenant {}: {}/{} delivered in {:?}",
            event, tenant_id, report.delivered, report.attempted, elapsed
        );

        Ok(report)
    }
}
