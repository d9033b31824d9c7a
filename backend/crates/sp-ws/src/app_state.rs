use crate::{
    BroadcastConfig, ConnectionConfig, ConnectionId, ConnectionLimits, ConnectionRegistry,
    ConnectionSlot, Metrics, ShutdownCoordinator, TenantBroadcaster, WebSocketConnection,
};

use axum::{
    extract::{
        Path, State,
        ws::{WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::Response,
};
use log::{debug, warn};

/// Shared state for the real-time layer. Cloning is cheap; every field
/// shares its underlying storage.
#[derive(Clone)]
pub struct AppState {
    pub registry: ConnectionRegistry,
    pub broadcaster: TenantBroadcaster,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
    pub config: ConnectionConfig,
}

impl AppState {
    pub fn new(
        config: ConnectionConfig,
        limits: ConnectionLimits,
        broadcast_config: BroadcastConfig,
    ) -> Self {
        let metrics = Metrics::new();
        let registry = ConnectionRegistry::new(limits);
        let broadcaster = TenantBroadcaster::new(registry.clone(), broadcast_config, metrics.clone());

        Self {
            registry,
            broadcaster,
            metrics,
            shutdown: ShutdownCoordinator::new(),
            config,
        }
    }
}

/// WebSocket upgrade handler for `/api/ws/{org_id}`
pub async fn handler(
    State(state): State<AppState>,
    Path(org_id): Path<String>,
    ws: WebSocketUpgrade,
) -> Result<Response, StatusCode> {
    if org_id.trim().is_empty() {
        warn!("Rejected WebSocket upgrade without an organization id");
        state.metrics.connection_rejected("missing_org");
        return Err(StatusCode::BAD_REQUEST);
    }

    if state.shutdown.is_shutdown() {
        state.metrics.connection_rejected("shutdown");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    let slot = state.registry.reserve(&org_id).await.map_err(|e| {
        warn!("Rejected WebSocket upgrade for tenant {}: {}", org_id, e);
        state.metrics.connection_rejected(e.error_code());
        StatusCode::SERVICE_UNAVAILABLE
    })?;

    let connection_id = ConnectionId::new();
    debug!("Upgrading connection {} for tenant {}", connection_id, org_id);

    Ok(ws
        .on_failed_upgrade(move |e| warn!("WebSocket upgrade failed for {}: {}", connection_id, e))
        .on_upgrade(move |socket| handle_socket(socket, connection_id, slot, state)))
}

/// Handle WebSocket connection after upgrade
async fn handle_socket(
    socket: WebSocket,
    connection_id: ConnectionId,
    slot: ConnectionSlot,
    state: AppState,
) {
    let shutdown_guard = state.shutdown.subscribe_guard();

    let connection = WebSocketConnection::new(
        connection_id,
        slot.tenant_id(),
        state.config,
        state.metrics,
        state.registry,
    );

    if let Err(e) = connection.handle(socket, slot, shutdown_guard).await {
        warn!("Connection {connection_id} ended with error: {e}");
    }
}
