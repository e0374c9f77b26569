// Copyright Keycloak Client Contributors
// SPDX-License-Identifier: Apache-2.0

use std::time::{Duration, Instant};

use reqwest::StatusCode;

use crate::errors::ClientError;

/// Raw result of one endpoint exchange, before classification.
#[derive(Debug)]
pub(crate) struct HttpExchange {
    pub status: StatusCode,
    pub body: String,
    pub elapsed: Duration,
}

/// HTTP transport for the token and revocation endpoints.
///
/// Owns the shared connection pool; this is the only state reused across
/// calls. Non-2xx responses are ordinary exchanges here; only
/// connectivity-level failures (DNS, connect, timeout) map to `Err`.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: reqwest::Client,
}

impl Transport {
    pub(crate) fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// POST a form-encoded body and capture status, body and elapsed time.
    pub(crate) async fn post_form(
        &self,
        url: &str,
        form: &[(&str, String)],
    ) -> Result<HttpExchange, ClientError> {
        let started = Instant::now();

        let response = self
            .http
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_transport_error)?;
        let elapsed = started.elapsed();

        tracing::trace!(
            %status,
            elapsed_ms = elapsed.as_millis() as u64,
            "endpoint exchange completed"
        );

        Ok(HttpExchange {
            status,
            body,
            elapsed,
        })
    }
}

fn map_transport_error(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::RequestTimeout { source: e }
    } else if e.is_connect() {
        ClientError::ConnectionFailed { source: e }
    } else {
        ClientError::Transport { source: e }
    }
}
