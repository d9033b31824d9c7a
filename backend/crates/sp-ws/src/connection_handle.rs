use crate::{ConnectionId, Result as WsErrorResult, WsError};

use std::panic::Location;
use std::time::Duration;

use axum::extract::ws::Message;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::{SendTimeoutError, TrySendError};

/// Cloneable handle to a live connection's outbound queue.
///
/// Sending enqueues onto a bounded FIFO that the connection's writer task
/// drains to the socket, so a handle never performs network I/O itself.
#[derive(Debug, Clone)]
pub struct ConnectionHandle {
    pub connection_id: ConnectionId,
    pub tenant_id: String,
    pub connected_at: DateTime<Utc>,
    sender: mpsc::Sender<Message>,
}

impl ConnectionHandle {
    pub fn new(
        connection_id: ConnectionId,
        tenant_id: impl Into<String>,
        sender: mpsc::Sender<Message>,
    ) -> Self {
        Self {
            connection_id,
            tenant_id: tenant_id.into(),
            connected_at: Utc::now(),
            sender,
        }
    }

    /// Enqueue a message, waiting at most `timeout` for queue space
    pub async fn send(&self, message: Message, timeout: Duration) -> WsErrorResult<()> {
        self.sender
            .send_timeout(message, timeout)
            .await
            .map_err(|e| match e {
                SendTimeoutError::Timeout(_) => WsError::SendTimeout {
                    timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                    location: ErrorLocation::from(Location::caller()),
                },
                SendTimeoutError::Closed(_) => WsError::ConnectionClosed {
                    reason: "outbound queue closed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
            })
    }

    /// Enqueue a message only if there is room right now
    #[track_caller]
    pub fn try_send(&self, message: Message) -> WsErrorResult<()> {
        self.sender.try_send(message).map_err(|e| match e {
            TrySendError::Full(_) => WsError::SendBufferFull {
                location: ErrorLocation::from(Location::caller()),
            },
            TrySendError::Closed(_) => WsError::ConnectionClosed {
                reason: "outbound queue closed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        })
    }
}
