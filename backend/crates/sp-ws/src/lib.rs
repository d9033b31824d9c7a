pub mod app_state;
pub mod broadcast_config;
pub mod broadcast_report;
pub mod connection_config;
pub mod connection_handle;
pub mod connection_id;
pub mod connection_limits;
pub mod connection_registry;
pub mod connection_slot;
pub mod error;
pub mod event_envelope;
pub mod event_kind;
pub mod metrics;
pub mod metrics_timer;
pub mod registration_guard;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod tenant_broadcaster;
pub mod web_socket_connection;

pub use app_state::{AppState, handler};
pub use broadcast_config::BroadcastConfig;
pub use broadcast_report::BroadcastReport;
pub use connection_config::ConnectionConfig;
pub use connection_handle::ConnectionHandle;
pub use connection_id::ConnectionId;
pub use connection_limits::ConnectionLimits;
pub use connection_registry::ConnectionRegistry;
pub use connection_slot::ConnectionSlot;
pub use error::{Result, WsError};
pub use event_envelope::EventEnvelope;
pub use event_kind::EventKind;
pub use metrics::Metrics;
pub use metrics_timer::MetricsTimer;
pub use registration_guard::RegistrationGuard;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use tenant_broadcaster::TenantBroadcaster;
pub use web_socket_connection::WebSocketConnection;

#[cfg(test)]
mod tests;
