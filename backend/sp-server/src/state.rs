use crate::{ServerError, ServerResult, StatusStore};

use sp_auth::JwtValidator;
use sp_config::Config;
use sp_ws::{AppState, BroadcastConfig, ConnectionConfig, ConnectionLimits};

use std::sync::Arc;
use std::time::Duration;

use axum::extract::FromRef;
use log::{info, warn};
use metrics_exporter_prometheus::PrometheusHandle;

/// Router state: the real-time layer plus everything REST handlers need
#[derive(Clone)]
pub struct ServerState {
    pub ws: AppState,
    pub store: StatusStore,
    /// None when authentication is disabled
    pub jwt_validator: Option<Arc<JwtValidator>>,
    pub dev_org_id: String,
    pub dev_user_id: String,
    pub prometheus: Option<PrometheusHandle>,
}

impl ServerState {
    pub fn from_config(
        config: &Config,
        jwt_validator: Option<Arc<JwtValidator>>,
        prometheus: Option<PrometheusHandle>,
    ) -> Self {
        let ws = AppState::new(
            ConnectionConfig {
                send_buffer_size: config.websocket.send_buffer_size,
                heartbeat_interval_secs: config.websocket.heartbeat_interval_secs,
                heartbeat_timeout_secs: config.websocket.heartbeat_timeout_secs,
            },
            ConnectionLimits {
                max_per_tenant: config.server.max_connections_per_org,
                max_total: config.server.max_connections,
            },
            BroadcastConfig {
                send_timeout: Duration::from_millis(config.websocket.send_timeout_ms),
            },
        );

        Self {
            ws,
            store: StatusStore::new(),
            jwt_validator,
            dev_org_id: config.auth.dev_org_id.clone(),
            dev_user_id: config.auth.dev_user_id.clone(),
            prometheus,
        }
    }
}

impl FromRef<ServerState> for AppState {
    fn from_ref(state: &ServerState) -> Self {
        state.ws.clone()
    }
}

/// Build the JWT validator configured in `auth`, if authentication is enabled
pub fn jwt_validator_from_config(config: &Config) -> ServerResult<Option<Arc<JwtValidator>>> {
    if !config.auth.enabled {
        warn!("Authentication DISABLED - staff routes use the development organization");
        return Ok(None);
    }

    if let Some(ref secret) = config.auth.jwt_secret {
        info!("JWT: HS256 authentication enabled");
        return Ok(Some(Arc::new(JwtValidator::with_hs256(secret.as_bytes()))));
    }

    match config.auth.jwt_public_key_path {
        Some(ref key_path) => {
            let full_path = Config::config_dir()?.join(key_path);
            let public_key =
                std::fs::read_to_string(&full_path).map_err(|e| ServerError::JwtKeyFile {
                    path: full_path.display().to_string(),
                    source: e,
                })?;
            info!("JWT: RS256 authentication enabled");
            Ok(Some(Arc::new(JwtValidator::with_rs256(&public_key)?)))
        }
        None => Err(sp_config::ConfigError::auth(
            "auth.enabled requires jwt_secret or jwt_public_key_path",
        )
        .into()),
    }
}
