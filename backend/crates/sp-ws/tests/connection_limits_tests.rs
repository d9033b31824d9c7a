mod common;

use common::{TestServerConfig, WsTestClient, create_test_server_with_config, wait_for_tenant_count};

#[tokio::test]
async fn given_tenant_at_limit_when_another_client_connects_then_service_unavailable() {
    // Given - per-tenant limit of 2
    let test_server = create_test_server_with_config(TestServerConfig::with_strict_limits());
    let registry = &test_server.app_state.registry;
    let first = WsTestClient::connect(&test_server.server, "org-full").await;
    let second = WsTestClient::connect(&test_server.server, "org-full").await;
    wait_for_tenant_count(registry, "org-full", 2).await;

    // When
    let response = test_server
        .server
        .get_websocket("/api/ws/org-full")
        .await;

    // Then
    response.assert_status_service_unavailable();
    assert_eq!(registry.tenant_count("org-full").await, 2);

    first.close().await;
    second.close().await;
}

#[tokio::test]
async fn given_tenant_at_limit_when_other_tenant_connects_then_accepted() {
    let test_server = create_test_server_with_config(TestServerConfig::with_strict_limits());
    let registry = &test_server.app_state.registry;
    let first = WsTestClient::connect(&test_server.server, "org-a").await;
    let second = WsTestClient::connect(&test_server.server, "org-a").await;
    wait_for_tenant_count(registry, "org-a", 2).await;

    let other = WsTestClient::connect(&test_server.server, "org-b").await;
    wait_for_tenant_count(registry, "org-b", 1).await;

    first.close().await;
    second.close().await;
    other.close().await;
}

#[tokio::test]
async fn given_total_at_limit_when_client_connects_then_service_unavailable() {
    // Given - total limit of 3 spread over tenants
    let test_server = create_test_server_with_config(TestServerConfig::with_strict_limits());
    let registry = &test_server.app_state.registry;
    let a = WsTestClient::connect(&test_server.server, "org-x").await;
    let b = WsTestClient::connect(&test_server.server, "org-y").await;
    let c = WsTestClient::connect(&test_server.server, "org-z").await;
    wait_for_tenant_count(registry, "org-z", 1).await;
    wait_for_tenant_count(registry, "org-y", 1).await;
    wait_for_tenant_count(registry, "org-x", 1).await;

    let response = test_server
        .server
        .get_websocket("/api/ws/org-w")
        .await;

    response.assert_status_service_unavailable();

    // Capacity frees up once a client leaves
    a.close().await;
    wait_for_tenant_count(registry, "org-x", 0).await;
    let d = WsTestClient::connect(&test_server.server, "org-w").await;
    wait_for_tenant_count(registry, "org-w", 1).await;

    b.close().await;
    c.close().await;
    d.close().await;
}

#[tokio::test]
async fn given_concurrent_upgrades_for_one_tenant_when_limit_reached_then_never_exceeded() {
    // Given - per-tenant limit of 2, four clients racing
    let test_server = create_test_server_with_config(TestServerConfig::with_strict_limits());
    let registry = &test_server.app_state.registry;
    let server = &test_server.server;

    // When
    let responses = futures::future::join_all(
        (0..4).map(|_| async move { server.get_websocket("/api/ws/org-race").await }),
    )
    .await;

    // Then
    let mut clients = Vec::new();
    for response in responses {
        if response.status_code() == axum::http::StatusCode::SWITCHING_PROTOCOLS {
            clients.push(response.into_websocket().await);
        }
    }
    assert_eq!(clients.len(), 2);
    wait_for_tenant_count(registry, "org-race", 2).await;
    assert_eq!(registry.pending_count().await, 0);

    for client in clients {
        client.close().await;
    }
}
