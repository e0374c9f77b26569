// Copyright Keycloak Client Contributors
// SPDX-License-Identifier: Apache-2.0

//! Per-request monitoring metadata and the sink it is reported through.

use std::time::Duration;

use http::Method;

/// Metadata captured for every token endpoint exchange, success or failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitoringMetrics {
    /// HTTP status code returned by the provider
    pub status_code: u16,
    /// HTTP method of the request
    pub http_method: Method,
    /// Request URL
    pub url: String,
    /// Wall-clock time spent on the exchange
    pub elapsed: Duration,
    /// Whether the exchange was classified as an error
    pub error: bool,
}

/// Sink receiving the metrics of every completed exchange.
///
/// Implementations must be cheap and non-blocking; the sink is invoked on
/// the request path. The default is [`TracingSink`]; callers wire their own
/// implementation to feed a metrics pipeline.
pub trait MonitoringSink: Send + Sync {
    fn record(&self, metrics: &MonitoringMetrics);
}

/// Default sink emitting metrics through `tracing`.
#[derive(Debug, Default, Clone)]
pub struct TracingSink;

impl MonitoringSink for TracingSink {
    fn record(&self, metrics: &MonitoringMetrics) {
        if metrics.error {
            tracing::warn!(
                status = metrics.status_code,
                url = %metrics.url,
                elapsed_ms = metrics.elapsed.as_millis() as u64,
                "identity provider call failed"
            );
        } else {
            tracing::debug!(
                status = metrics.status_code,
                url = %metrics.url,
                elapsed_ms = metrics.elapsed.as_millis() as u64,
                "identity provider call completed"
            );
        }
    }
}
