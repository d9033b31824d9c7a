use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WsError {
    #[error("Connection closed: {reason} {location}")]
    ConnectionClosed {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Event serialization failed: {source} {location}")]
    Serialize {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Send buffer full, client too slow {location}")]
    SendBufferFull { location: ErrorLocation },

    #[error("Send timed out after {timeout_ms}ms {location}")]
    SendTimeout {
        timeout_ms: u64,
        location: ErrorLocation,
    },

    #[error("Connection limit exceeded: {current} connections (max: {max}) {location}")]
    ConnectionLimitExceeded {
        current: usize,
        max: usize,
        location: ErrorLocation,
    },

    #[error(
        "Tenant connection limit exceeded for {tenant_id}: {current} connections (max: {max}) {location}"
    )]
    TenantLimitExceeded {
        tenant_id: String,
        current: usize,
        max: usize,
        location: ErrorLocation,
    },

    #[error("Heartbeat timeout after {timeout_secs}s {location}")]
    HeartbeatTimeout {
        timeout_secs: u64,
        location: ErrorLocation,
    },
}

impl WsError {
    /// Short stable label, used for metrics and close reasons
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConnectionClosed { .. } => "connection_closed",
            Self::Serialize { .. } => "serialize",
            Self::SendBufferFull { .. } => "send_buffer_full",
            Self::SendTimeout { .. } => "send_timeout",
            Self::ConnectionLimitExceeded { .. } => "connection_limit",
            Self::TenantLimitExceeded { .. } => "tenant_limit",
            Self::HeartbeatTimeout { .. } => "heartbeat_timeout",
        }
    }
}

impl From<serde_json::Error> for WsError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, WsError>;
