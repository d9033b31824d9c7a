//! Prometheus recorder and the `/metrics` endpoint

use crate::{ServerError, ServerResult, ServerState};

use std::panic::Location;

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use log::info;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the global Prometheus recorder. Call once, before any metric is recorded.
#[track_caller]
pub fn install_recorder() -> ServerResult<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics {
            message: format!("Failed to install metrics recorder: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;
    info!("Prometheus metrics recorder installed");
    Ok(handle)
}

/// GET /metrics - Prometheus text exposition
pub async fn render(State(state): State<ServerState>) -> Response {
    match state.prometheus {
        Some(ref handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Metrics recorder not installed").into_response(),
    }
}
