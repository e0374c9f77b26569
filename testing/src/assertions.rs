// Copyright Keycloak Client Contributors
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use kc_client::monitoring::MonitoringMetrics;
use kc_client::response::ApiResponse;
use kc_client::token::IdentityProviderToken;

/// Assert a successful token envelope: no error, payload present, and both
/// token values non-empty.
pub fn assert_token_response(envelope: &ApiResponse<IdentityProviderToken>) {
    assert!(
        !envelope.is_error(),
        "expected a success envelope, got error: {:?}",
        envelope.error_message()
    );
    let token = envelope
        .response()
        .expect("success envelope must carry a token payload");
    assert!(!token.access_token.is_empty(), "access token must not be empty");
    assert!(token.has_refresh_token(), "refresh token must not be empty");
}

/// Assert the metrics of a completed exchange: expected status code, POST
/// method, matching error flag and a measured elapsed time.
pub fn assert_monitoring_metrics(metrics: &MonitoringMetrics, status_code: u16, error: bool) {
    assert_eq!(metrics.status_code, status_code);
    assert_eq!(metrics.http_method.as_str(), "POST");
    assert_eq!(metrics.error, error);
    assert!(metrics.elapsed > Duration::ZERO, "elapsed time must be measured");
}
