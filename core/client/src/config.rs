// Copyright Keycloak Client Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTTP client tuning consumed by [`KeycloakClient`](crate::client::KeycloakClient).

use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::ClientError;

/// Default per-request timeout for token endpoint calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_USER_AGENT: &str = "keycloak-client";

/// Tuning for the underlying HTTP client.
///
/// All fields are optional; the defaults are suitable for talking to a
/// provider on the local network. The configuration is consumed once when
/// the client is constructed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct HttpClientConfig {
    /// Overall timeout for a single request (default: 30s)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,

    /// TCP connect timeout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<Duration>,

    /// User-Agent header sent with every request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl HttpClientConfig {
    /// Build the `reqwest` client described by this configuration.
    pub(crate) fn build(&self) -> Result<reqwest::Client, ClientError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));

        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        builder
            .build()
            .map_err(|e| ClientError::ConfigError(format!("failed to create HTTP client: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_a_client() {
        let config = HttpClientConfig::default();
        assert!(config.build().is_ok());
    }

    #[test]
    fn explicit_tuning_builds_a_client() {
        let config = HttpClientConfig {
            timeout: Some(Duration::from_secs(5)),
            connect_timeout: Some(Duration::from_secs(1)),
            user_agent: Some("integration-suite".to_string()),
        };
        assert!(config.build().is_ok());
    }

    #[test]
    fn options_are_omitted_from_serialized_form() {
        let json = serde_json::to_value(HttpClientConfig::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
