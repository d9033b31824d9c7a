use crate::ServerState;

use sp_ws::EventKind;

use log::{debug, error, warn};
use serde::Serialize;

/// Push a committed change to the organization's live dashboards.
///
/// Never fails the caller: the mutation is already committed, so a broadcast
/// problem is only logged.
pub async fn publish<T>(state: &ServerState, org_id: &str, event: EventKind, payload: &T)
where
    T: Serialize + ?Sized,
{
    match state.ws.broadcaster.broadcast(org_id, event, payload).await {
        Ok(report) if report.is_complete() => debug!(
            "Published {} to {} connection(s) of org {}",
            event, report.delivered, org_id
        ),
        Ok(report) => warn!(
            "Published {} to org {} with {} of {} deliveries failed",
            event,
            org_id,
            report.failed.len(),
            report.attempted
        ),
        Err(e) => error!("Failed to publish {} for org {}: {}", event, org_id, e),
    }
}
