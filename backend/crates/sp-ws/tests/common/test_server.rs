#![allow(dead_code)]

use sp_ws::{AppState, BroadcastConfig, ConnectionConfig, ConnectionLimits, ConnectionRegistry};

use std::time::Duration;

use axum::{Router, routing::get};
use axum_test::TestServer;
use tokio::time::{sleep, timeout};

/// Configuration for test server instances
#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub max_connections_total: usize,
    pub max_connections_per_tenant: usize,
    pub connection: ConnectionConfig,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            max_connections_total: 100,
            max_connections_per_tenant: 50,
            connection: ConnectionConfig::default(),
        }
    }
}

impl TestServerConfig {
    /// Create config with strict connection limits (for limit tests)
    pub fn with_strict_limits() -> Self {
        Self {
            max_connections_total: 3,
            max_connections_per_tenant: 2,
            ..Default::default()
        }
    }

    /// Short heartbeat so liveness tests finish quickly
    pub fn with_fast_heartbeat() -> Self {
        Self {
            connection: ConnectionConfig {
                heartbeat_interval_secs: 1,
                heartbeat_timeout_secs: 1,
                ..ConnectionConfig::default()
            },
            ..Default::default()
        }
    }
}

/// Test server with access to AppState for testing
pub struct TestServerWithState {
    pub server: TestServer,
    pub app_state: AppState,
}

pub fn create_test_server() -> TestServerWithState {
    create_test_server_with_config(TestServerConfig::default())
}

pub fn create_test_server_with_config(config: TestServerConfig) -> TestServerWithState {
    let app_state = AppState::new(
        config.connection,
        ConnectionLimits {
            max_per_tenant: config.max_connections_per_tenant,
            max_total: config.max_connections_total,
        },
        BroadcastConfig::default(),
    );

    let app = Router::new()
        .route("/api/ws/{org_id}", get(sp_ws::handler))
        .with_state(app_state.clone());

    let server = TestServer::builder()
        .http_transport()
        .build(app)
        .expect("Failed to create test server");

    TestServerWithState { server, app_state }
}

/// Registration happens after the upgrade completes, so tests wait for it
pub async fn wait_for_tenant_count(registry: &ConnectionRegistry, tenant_id: &str, expected: usize) {
    timeout(Duration::from_secs(2), async {
        while registry.tenant_count(tenant_id).await != expected {
            sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .unwrap_or_else(|_| panic!("tenant {tenant_id} never reached {expected} connections"));
}
