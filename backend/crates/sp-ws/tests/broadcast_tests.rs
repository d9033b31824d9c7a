mod common;

use common::{create_clients_for_tenant, create_test_server, wait_for_tenant_count, WsTestClient};

use sp_ws::EventKind;

use serde_json::json;
use tokio::time::Duration;

#[tokio::test]
async fn given_two_clients_same_tenant_when_broadcast_then_both_receive_exact_envelope() {
    // Given
    let test_server = create_test_server();
    let registry = &test_server.app_state.registry;
    let mut clients = create_clients_for_tenant(&test_server.server, "org-1", 2).await;
    wait_for_tenant_count(registry, "org-1", 2).await;

    // When
    let report = test_server
        .app_state
        .broadcaster
        .broadcast("org-1", EventKind::ServiceUpdated, &json!({"id": "s1"}))
        .await
        .expect("Broadcast should succeed");

    // Then
    assert_eq!(report.attempted, 2);
    assert_eq!(report.delivered, 2);
    for client in clients.iter_mut() {
        assert_eq!(
            client.receive_text().await,
            r#"{"event":"SERVICE_UPDATED","data":{"id":"s1"}}"#
        );
    }

    for client in clients {
        client.close().await;
    }
}

#[tokio::test]
async fn given_sequential_broadcasts_when_received_then_in_call_order() {
    let test_server = create_test_server();
    let mut client = WsTestClient::connect(&test_server.server, "org-order").await;
    wait_for_tenant_count(&test_server.app_state.registry, "org-order", 1).await;

    let kinds = [
        EventKind::IncidentCreated,
        EventKind::UpdateAdded,
        EventKind::IncidentUpdated,
    ];
    for (seq, kind) in kinds.iter().enumerate() {
        test_server
            .app_state
            .broadcaster
            .broadcast("org-order", *kind, &json!({"seq": seq}))
            .await
            .expect("Broadcast should succeed");
    }

    for (seq, kind) in kinds.iter().enumerate() {
        let message = client.receive_json().await;
        assert_eq!(message["event"], kind.as_str());
        assert_eq!(message["data"]["seq"], seq);
    }

    client.close().await;
}

#[tokio::test]
async fn given_client_disconnected_when_broadcast_then_remaining_client_receives() {
    let test_server = create_test_server();
    let registry = &test_server.app_state.registry;
    let leaving = WsTestClient::connect(&test_server.server, "org-leave").await;
    let mut staying = WsTestClient::connect(&test_server.server, "org-leave").await;
    wait_for_tenant_count(registry, "org-leave", 2).await;

    leaving.close().await;
    wait_for_tenant_count(registry, "org-leave", 1).await;

    let report = test_server
        .app_state
        .broadcaster
        .broadcast("org-leave", EventKind::ServiceUpdated, &json!({"id": "s2"}))
        .await
        .expect("Broadcast should succeed");

    assert_eq!(report.attempted, 1);
    let message = staying.receive_json().await;
    assert_eq!(message["data"]["id"], "s2");
    assert!(staying.receives_nothing_within(Duration::from_millis(100)).await);

    staying.close().await;
}

#[tokio::test]
async fn given_client_sends_text_when_received_then_ignored_and_connection_kept() {
    let test_server = create_test_server();
    let mut client = WsTestClient::connect(&test_server.server, "org-chatty").await;
    wait_for_tenant_count(&test_server.app_state.registry, "org-chatty", 1).await;

    client.send_text("hello server").await;
    assert!(client.receives_nothing_within(Duration::from_millis(100)).await);

    test_server
        .app_state
        .broadcaster
        .broadcast("org-chatty", EventKind::UpdateAdded, &json!({"id": "u1"}))
        .await
        .expect("Broadcast should succeed");
    assert_eq!(client.receive_json().await["event"], "UPDATE_ADDED");

    client.close().await;
}
