//! Observability: structured logging hooks and request metrics.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Metrics collector for Webex API operations.
#[derive(Debug, Default)]
pub struct Metrics {
    /// Total requests made.
    requests_total: AtomicU64,
    /// Successful requests.
    requests_success: AtomicU64,
    /// Failed requests.
    requests_failed: AtomicU64,
    /// Responses that came back 429.
    requests_rate_limited: AtomicU64,
    /// Total request latency in microseconds.
    latency_total_us: AtomicU64,
    /// Request count for latency calculation.
    latency_count: AtomicU64,
}

impl Metrics {
    /// Creates a new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a request.
    pub fn record_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a successful request.
    pub fn record_success(&self) {
        self.requests_success.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a failed request.
    pub fn record_failure(&self) {
        self.requests_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a rate-limited response.
    pub fn record_rate_limited(&self) {
        self.requests_rate_limited.fetch_add(1, Ordering::Relaxed);
    }

    /// Records request latency.
    pub fn record_latency(&self, duration: Duration) {
        let us = duration.as_micros() as u64;
        self.latency_total_us.fetch_add(us, Ordering::Relaxed);
        self.latency_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Gets the average latency in microseconds.
    pub fn average_latency_us(&self) -> u64 {
        let total = self.latency_total_us.load(Ordering::Relaxed);
        let count = self.latency_count.load(Ordering::Relaxed);
        if count == 0 {
            0
        } else {
            total / count
        }
    }

    /// Gets a snapshot of all metrics.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_total: self.requests_total.load(Ordering::Relaxed),
            requests_success: self.requests_success.load(Ordering::Relaxed),
            requests_failed: self.requests_failed.load(Ordering::Relaxed),
            requests_rate_limited: self.requests_rate_limited.load(Ordering::Relaxed),
            average_latency_us: self.average_latency_us(),
        }
    }
}

/// A snapshot of metrics at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Total HTTP attempts, retries included.
    pub requests_total: u64,
    /// Successful requests.
    pub requests_success: u64,
    /// Failed requests.
    pub requests_failed: u64,
    /// Responses that came back 429.
    pub requests_rate_limited: u64,
    /// Average latency in microseconds.
    pub average_latency_us: u64,
}

/// Tracing hooks for Webex API operations.
pub struct TracingHooks;

impl TracingHooks {
    /// Logs the start of an API request.
    pub fn on_request_start(method: &str, path: &str, tracking_id: &str) {
        debug!(
            method = %method,
            path = %path,
            tracking_id = %tracking_id,
            "Webex API request started"
        );
    }

    /// Logs the completion of an API request.
    pub fn on_request_complete(method: &str, path: &str, status: u16, duration: Duration) {
        info!(
            method = %method,
            path = %path,
            status = status,
            duration_ms = duration.as_millis() as u64,
            "Webex API request completed"
        );
    }

    /// Logs a request error.
    pub fn on_request_error(method: &str, path: &str, error: &str) {
        error!(
            method = %method,
            path = %path,
            error = %error,
            "Webex API request failed"
        );
    }

    /// Logs a retry attempt.
    pub fn on_retry(attempt: u32, delay: Duration, error: Option<String>) {
        warn!(
            attempt = attempt,
            delay_ms = delay.as_millis() as u64,
            error = error.as_deref().unwrap_or("rate limited"),
            "Retrying Webex API request"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_snapshot() {
        let metrics = Metrics::new();

        metrics.record_request();
        metrics.record_request();
        metrics.record_success();
        metrics.record_failure();
        metrics.record_rate_limited();
        metrics.record_latency(Duration::from_millis(100));

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.requests_total, 2);
        assert_eq!(snapshot.requests_success, 1);
        assert_eq!(snapshot.requests_failed, 1);
        assert_eq!(snapshot.requests_rate_limited, 1);
        assert!(snapshot.average_latency_us >= 100_000);
    }
}
