#![allow(dead_code)]

//! Test infrastructure for sp-server API tests

use sp_auth::{Claims, JwtValidator};
use sp_config::Config;
use sp_server::{ServerState, build_router};

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_ORG: &str = "test-org";
pub const TEST_USER: &str = "test-user";
pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-integration-tests-min-32-bytes-long";

/// State with authentication disabled; staff routes act for `TEST_ORG`
pub fn create_test_state() -> ServerState {
    let mut config = Config::default();
    config.auth.dev_org_id = TEST_ORG.to_string();
    config.auth.dev_user_id = TEST_USER.to_string();
    ServerState::from_config(&config, None, None)
}

/// State that requires an HS256 bearer token on staff routes
pub fn create_test_state_with_auth() -> ServerState {
    let mut config = Config::default();
    config.auth.enabled = true;
    let validator = Arc::new(JwtValidator::with_hs256(TEST_JWT_SECRET));
    ServerState::from_config(&config, Some(validator), None)
}

fn now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

pub fn create_token(org_id: &str, user_id: &str) -> String {
    sign(Claims {
        sub: user_id.to_string(),
        org_id: org_id.to_string(),
        role: "admin".to_string(),
        exp: now() + 3600,
        iat: now(),
    })
}

pub fn create_expired_token(org_id: &str, user_id: &str) -> String {
    sign(Claims {
        sub: user_id.to_string(),
        org_id: org_id.to_string(),
        role: "admin".to_string(),
        exp: now() - 3600,
        iat: now() - 7200,
    })
}

fn sign(claims: Claims) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET),
    )
    .unwrap()
}

/// Send one request through a fresh router and decode the body as JSON
/// (non-JSON bodies decode to `Value::Null`)
pub async fn send(
    state: &ServerState,
    method: &str,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

/// Create a service through the API and return its JSON
pub async fn create_service(state: &ServerState, name: &str, status: &str) -> Value {
    let (code, json) = send(
        state,
        "POST",
        "/api/services",
        Some(serde_json::json!({ "name": name, "status": status })),
        None,
    )
    .await;
    assert_eq!(code, StatusCode::CREATED);
    json["service"].clone()
}

/// Create an incident through the API and return its detail JSON
pub async fn create_incident(
    state: &ServerState,
    title: &str,
    status: &str,
    service_ids: &[&str],
) -> Value {
    let (code, json) = send(
        state,
        "POST",
        "/api/incidents",
        Some(serde_json::json!({
            "title": title,
            "description": "",
            "status": status,
            "serviceIds": service_ids,
        })),
        None,
    )
    .await;
    assert_eq!(code, StatusCode::CREATED);
    json["incident"].clone()
}

/// Real HTTP server for tests that mix REST calls with WebSocket dashboards
pub fn create_http_server(state: &ServerState) -> axum_test::TestServer {
    axum_test::TestServer::builder()
        .http_transport()
        .build(build_router(state.clone()))
        .expect("Failed to create test server")
}

/// Open a dashboard connection and wait until it is registered
pub async fn connect_dashboard(
    server: &axum_test::TestServer,
    state: &ServerState,
    org_id: &str,
) -> axum_test::TestWebSocket {
    let before = state.ws.registry.tenant_count(org_id).await;
    let ws = server
        .get_websocket(&format!("/api/ws/{org_id}"))
        .await
        .into_websocket()
        .await;

    tokio::time::timeout(std::time::Duration::from_secs(2), async {
        while state.ws.registry.tenant_count(org_id).await <= before {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("dashboard never registered");

    ws
}

/// Next event pushed to a dashboard, decoded
pub async fn next_event(ws: &mut axum_test::TestWebSocket) -> Value {
    let text = tokio::time::timeout(std::time::Duration::from_secs(2), ws.receive_text())
        .await
        .expect("Timed out waiting for event");
    serde_json::from_str(&text).expect("Event should be JSON")
}
