use crate::{ConnectionId, EventKind};

/// Outcome of one broadcast call
#[derive(Debug, Clone)]
pub struct BroadcastReport {
    pub tenant_id: String,
    pub event: EventKind,
    /// Connections in the snapshot; one send attempt each
    pub attempted: usize,
    pub delivered: usize,
    /// Connections whose send failed or timed out. They stay registered.
    pub failed: Vec<ConnectionId>,
}

impl BroadcastReport {
    pub fn new(tenant_id: impl Into<String>, event: EventKind, attempted: usize) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            event,
            attempted,
            delivered: 0,
            failed: Vec::new(),
        }
    }

    /// Report for a tenant with no subscribers
    pub fn empty(tenant_id: impl Into<String>, event: EventKind) -> Self {
        Self::new(tenant_id, event, 0)
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.delivered == self.attempted
    }
}
