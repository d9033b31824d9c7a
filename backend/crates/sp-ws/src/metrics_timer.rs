use crate::Metrics;

use std::time::{Duration, Instant};

/// Times one fan-out
pub struct MetricsTimer {
    start: Instant,
    metrics: Metrics,
}

impl MetricsTimer {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Record the elapsed time and return it
    pub fn finish(self) -> Duration {
        let duration = self.start.elapsed();
        self.metrics.broadcast_latency(duration);
        duration
    }
}
