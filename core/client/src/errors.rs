// Copyright Keycloak Client Contributors
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Failures that escape a client operation.
///
/// Provider-returned errors (non-2xx token endpoint responses) and
/// malformed success bodies never appear here; they are reported through
/// the [`ApiResponse`](crate::response::ApiResponse) envelope. Only input
/// validation, configuration problems and connectivity-level failures are
/// worth an `Err`.
#[derive(Error, Debug)]
pub enum ClientError {
    // Configuration / input validation
    #[error("config error: {0}")]
    ConfigError(String),
    #[error("validation error: {0}")]
    ValidationError(String),

    // URL parsing
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    // Transport-level failures
    // (No blanket #[from] reqwest::Error: the same source type maps to
    // different variants depending on the failure mode.)
    #[error("request timed out: {source}")]
    RequestTimeout { source: reqwest::Error },
    #[error("connection failed: {source}")]
    ConnectionFailed { source: reqwest::Error },
    #[error("HTTP transport error: {source}")]
    Transport { source: reqwest::Error },
}
