use std::time::Duration;

/// Configuration for tenant fan-out
#[derive(Debug, Clone)]
pub struct BroadcastConfig {
    /// Upper bound on how long one broadcast waits for a single slow connection
    pub send_timeout: Duration,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            send_timeout: Duration::from_secs(5),
        }
    }
}
