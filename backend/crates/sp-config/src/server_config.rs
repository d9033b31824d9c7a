use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_MAX_CONNECTIONS,
    DEFAULT_MAX_CONNECTIONS_PER_ORG, DEFAULT_PORT, MAX_MAX_CONNECTIONS, MIN_MAX_CONNECTIONS,
    MIN_PORT,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum concurrent WebSocket connections across all organizations
    pub max_connections: usize,
    /// Maximum concurrent WebSocket connections for a single organization
    pub max_connections_per_org: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            max_connections_per_org: DEFAULT_MAX_CONNECTIONS_PER_ORG,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 lets the OS pick
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::config(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if self.max_connections < MIN_MAX_CONNECTIONS || self.max_connections > MAX_MAX_CONNECTIONS
        {
            return Err(ConfigError::config(format!(
                "server.max_connections must be {}-{}, got {}",
                MIN_MAX_CONNECTIONS, MAX_MAX_CONNECTIONS, self.max_connections
            )));
        }

        if self.max_connections_per_org < MIN_MAX_CONNECTIONS
            || self.max_connections_per_org > self.max_connections
        {
            return Err(ConfigError::config(format!(
                "server.max_connections_per_org must be {}-{} (max_connections), got {}",
                MIN_MAX_CONNECTIONS, self.max_connections, self.max_connections_per_org
            )));
        }

        Ok(())
    }
}
