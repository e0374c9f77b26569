// Copyright Keycloak Client Contributors
// SPDX-License-Identifier: Apache-2.0

//! The response envelope wrapping every outward-facing call result.

use http::Method;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::monitoring::MonitoringMetrics;
use crate::transport::HttpExchange;

/// Error payload returned by the provider on failed calls, per RFC 6749.
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: Option<String>,
    error_description: Option<String>,
}

/// Envelope carrying either the provider payload or an error description,
/// always together with monitoring metrics.
///
/// Exactly one of `response()` and `is_error()` holds. Callers must check
/// `is_error()` before trusting `response()`; the metrics are populated in
/// every case to support observability even on failure.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    response: Option<T>,
    is_error: bool,
    error_message: Option<String>,
    monitoring_metrics: MonitoringMetrics,
}

impl<T> ApiResponse<T> {
    pub(crate) fn success(value: T, mut metrics: MonitoringMetrics) -> Self {
        metrics.error = false;
        Self {
            response: Some(value),
            is_error: false,
            error_message: None,
            monitoring_metrics: metrics,
        }
    }

    pub(crate) fn error(message: impl Into<String>, mut metrics: MonitoringMetrics) -> Self {
        metrics.error = true;
        Self {
            response: None,
            is_error: true,
            error_message: Some(message.into()),
            monitoring_metrics: metrics,
        }
    }

    /// Demote a success envelope to an error outcome when `check` rejects
    /// the payload.
    pub(crate) fn validated(self, check: impl FnOnce(&T) -> Result<(), String>) -> Self {
        if let Some(value) = &self.response {
            if let Err(message) = check(value) {
                return ApiResponse::error(message, self.monitoring_metrics);
            }
        }
        self
    }

    /// The parsed payload, present only on success.
    pub fn response(&self) -> Option<&T> {
        self.response.as_ref()
    }

    /// Consume the envelope, yielding the payload on success.
    pub fn into_response(self) -> Option<T> {
        self.response
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// Provider error description, present only on error.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn monitoring_metrics(&self) -> &MonitoringMetrics {
        &self.monitoring_metrics
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Classify a transport exchange purely by HTTP status: 2xx parses the
    /// body into `T`, anything else extracts the provider's error
    /// description. A 2xx body that fails to parse is itself an error
    /// outcome, never a fault.
    pub(crate) fn from_exchange(exchange: &HttpExchange, method: Method, url: &str) -> Self {
        let metrics = metrics_for(exchange, method, url);

        if exchange.status.is_success() {
            match serde_json::from_str::<T>(&exchange.body) {
                Ok(value) => ApiResponse::success(value, metrics),
                Err(e) => ApiResponse::error(
                    format!("failed to parse provider response: {}", e),
                    metrics,
                ),
            }
        } else {
            ApiResponse::error(extract_error_message(&exchange.body, exchange.status), metrics)
        }
    }
}

impl ApiResponse<()> {
    /// Classify an exchange whose success carries no body, e.g. revocation.
    pub(crate) fn from_empty_exchange(exchange: &HttpExchange, method: Method, url: &str) -> Self {
        let metrics = metrics_for(exchange, method, url);

        if exchange.status.is_success() {
            ApiResponse::success((), metrics)
        } else {
            ApiResponse::error(extract_error_message(&exchange.body, exchange.status), metrics)
        }
    }
}

fn metrics_for(exchange: &HttpExchange, method: Method, url: &str) -> MonitoringMetrics {
    MonitoringMetrics {
        status_code: exchange.status.as_u16(),
        http_method: method,
        url: url.to_string(),
        elapsed: exchange.elapsed,
        error: !exchange.status.is_success(),
    }
}

/// Prefer the provider's human-readable description, then its error code,
/// then text derived from the status line.
fn extract_error_message(body: &str, status: StatusCode) -> String {
    if let Ok(parsed) = serde_json::from_str::<ProviderErrorBody>(body) {
        if let Some(description) = parsed.error_description {
            if !description.is_empty() {
                return description;
            }
        }
        if let Some(error) = parsed.error {
            if !error.is_empty() {
                return error;
            }
        }
    }
    format!("token endpoint returned status {}", status)
}
