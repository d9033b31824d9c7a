use crate::{
    ConnectionConfig, ConnectionHandle, ConnectionId, ConnectionRegistry, ConnectionSlot, Metrics,
    RegistrationGuard, Result as WsErrorResult, ShutdownGuard, WsError,
};

use std::panic::Location;
use std::time::Duration;

use axum::extract::ws::{CloseFrame, Message, Utf8Bytes, WebSocket, close_code};
use bytes::Bytes;
use chrono::Utc;
use error_location::ErrorLocation;
use futures::{SinkExt, StreamExt};
use log::{debug, info, warn};
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior, interval_at, timeout};

/// How long cleanup waits for the writer to flush queued frames
const WRITER_DRAIN_TIMEOUT: Duration = Duration::from_secs(2);

/// Why the read loop stopped
enum Exit {
    ClientClosed,
    StreamEnded,
    Shutdown,
}

/// Manages a single WebSocket connection: registration, the inbound read
/// loop, heartbeats and cleanup.
pub struct WebSocketConnection {
    connection_id: ConnectionId,
    tenant_id: String,
    config: ConnectionConfig,
    metrics: Metrics,
    registry: ConnectionRegistry,
}

impl WebSocketConnection {
    pub fn new(
        connection_id: ConnectionId,
        tenant_id: impl Into<String>,
        config: ConnectionConfig,
        metrics: Metrics,
        registry: ConnectionRegistry,
    ) -> Self {
        Self {
            connection_id,
            tenant_id: tenant_id.into(),
            config,
            metrics,
            registry,
        }
    }

    /// Handle the WebSocket connection lifecycle.
    ///
    /// The connection is registered for its tenant, taking up `slot`, once the
    /// writer is running and unregistered before the socket is released, on
    /// every exit path.
    pub async fn handle(
        self,
        socket: WebSocket,
        slot: ConnectionSlot,
        mut shutdown_guard: ShutdownGuard,
    ) -> WsErrorResult<()> {
        let (mut ws_sender, mut ws_receiver) = socket.split();

        // Bounded so a slow reader pushes back on broadcasters
        let (tx, mut rx) = mpsc::channel::<Message>(self.config.send_buffer_size.max(1));

        let mut send_task = tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                let closing = matches!(msg, Message::Close(_));
                if ws_sender.send(msg).await.is_err() || closing {
                    break;
                }
            }
            let _ = ws_sender.close().await;
        });

        let handle = ConnectionHandle::new(self.connection_id, self.tenant_id.clone(), tx);
        let connected_at = handle.connected_at;
        slot.register(handle.clone()).await;
        let registration =
            RegistrationGuard::new(self.registry.clone(), &self.tenant_id, self.connection_id);

        self.metrics.connection_established();
        info!(
            "WebSocket connection {} established for tenant {}",
            self.connection_id, self.tenant_id
        );

        let heartbeat_period = Duration::from_secs(self.config.heartbeat_interval_secs.max(1));
        let heartbeat_timeout = Duration::from_secs(self.config.heartbeat_timeout_secs);
        let mut last_seen = Instant::now();
        let mut heartbeat = interval_at(last_seen + heartbeat_period, heartbeat_period);
        heartbeat.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let result = loop {
            tokio::select! {
                msg = ws_receiver.next() => match msg {
                    Some(Ok(Message::Close(_))) => break Ok(Exit::ClientClosed),
                    // Content is ignored, any frame proves the peer is alive
                    Some(Ok(_)) => last_seen = Instant::now(),
                    Some(Err(e)) => {
                        warn!("WebSocket error on connection {}: {}", self.connection_id, e);
                        break Err(WsError::ConnectionClosed {
                            reason: format!("WebSocket error: {}", e),
                            location: ErrorLocation::from(Location::caller()),
                        });
                    }
                    None => break Ok(Exit::StreamEnded),
                },

                _ = heartbeat.tick() => {
                    if last_seen.elapsed() >= heartbeat_timeout {
                        warn!(
                            "Connection {} missed heartbeat for {:?}, closing",
                            self.connection_id,
                            last_seen.elapsed()
                        );
                        break Err(WsError::HeartbeatTimeout {
                            timeout_secs: self.config.heartbeat_timeout_secs,
                            location: ErrorLocation::from(Location::caller()),
                        });
                    }
                    if let Err(e) = handle.try_send(Message::Ping(Bytes::new())) {
                        debug!("Skipped ping for connection {}: {}", self.connection_id, e);
                    }
                }

                _ = shutdown_guard.wait() => break Ok(Exit::Shutdown),
            }
        };

        // No broadcast started after this point can pick the connection up
        registration.release().await;

        if let Some(frame) = close_frame(&result) {
            let _ = handle.try_send(Message::Close(Some(frame)));
        }
        drop(handle);

        if timeout(WRITER_DRAIN_TIMEOUT, &mut send_task).await.is_err() {
            debug!("Writer for connection {} did not drain, aborting", self.connection_id);
            send_task.abort();
        }

        let reason = match &result {
            Ok(Exit::ClientClosed) => "client_closed",
            Ok(Exit::StreamEnded) => "stream_ended",
            Ok(Exit::Shutdown) => "shutdown",
            Err(e) => e.error_code(),
        };
        self.metrics.connection_closed(reason);
        info!(
            "WebSocket connection {} closed for tenant {} after {}s ({})",
            self.connection_id,
            self.tenant_id,
            (Utc::now() - connected_at).num_seconds(),
            reason
        );

        result.map(|_| ())
    }
}

/// Close frame the server sends on its side of the handshake
fn close_frame(result: &WsErrorResult<Exit>) -> Option<CloseFrame> {
    let (code, reason) = match result {
        Ok(Exit::ClientClosed) | Ok(Exit::StreamEnded) => (close_code::NORMAL, "closing"),
        Ok(Exit::Shutdown) => (close_code::AWAY, "server shutting down"),
        Err(WsError::HeartbeatTimeout { .. }) => (close_code::POLICY, "heartbeat timeout"),
        Err(_) => return None,
    };
    Some(CloseFrame {
        code,
        reason: Utf8Bytes::from_static(reason),
    })
}
