#![allow(dead_code)]

use axum_test::{TestServer, TestWebSocket};
use serde_json::Value;
use tokio::time::{Duration, timeout};

/// WebSocket test client wrapper
pub struct WsTestClient {
    ws: TestWebSocket,
    pub tenant_id: String,
}

impl WsTestClient {
    pub async fn connect(server: &TestServer, tenant_id: &str) -> Self {
        let ws = server
            .get_websocket(&format!("/api/ws/{tenant_id}"))
            .await
            .into_websocket()
            .await;

        Self {
            ws,
            tenant_id: tenant_id.to_string(),
        }
    }

    pub async fn receive_text(&mut self) -> String {
        timeout(Duration::from_secs(2), self.ws.receive_text())
            .await
            .expect("Timed out waiting for message")
    }

    pub async fn receive_json(&mut self) -> Value {
        let text = self.receive_text().await;
        serde_json::from_str(&text).expect("Message should be JSON")
    }

    /// True if no message arrives within `wait`
    pub async fn receives_nothing_within(&mut self, wait: Duration) -> bool {
        timeout(wait, self.ws.receive_text()).await.is_err()
    }

    pub async fn send_text(&mut self, text: impl std::fmt::Display) {
        self.ws.send_text(text).await;
    }

    pub async fn close(self) {
        self.ws.close().await;
    }
}

/// Create multiple clients for the same tenant
pub async fn create_clients_for_tenant(
    server: &TestServer,
    tenant_id: &str,
    count: usize,
) -> Vec<WsTestClient> {
    let mut clients = Vec::with_capacity(count);
    for _ in 0..count {
        clients.push(WsTestClient::connect(server, tenant_id).await);
    }
    clients
}
