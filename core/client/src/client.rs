// Copyright Keycloak Client Contributors
// SPDX-License-Identifier: Apache-2.0

//! Top-level entry point for talking to a Keycloak deployment.

use std::sync::Arc;

use url::Url;

use crate::auth::Auth;
use crate::config::HttpClientConfig;
use crate::errors::ClientError;
use crate::monitoring::{MonitoringSink, TracingSink};
use crate::transport::Transport;

/// Facade over the identity provider's client-facing endpoints.
///
/// Construction validates the base URL eagerly and builds the shared HTTP
/// transport; the facade itself holds no token state, so a single instance
/// can serve concurrent callers.
pub struct KeycloakClient {
    base_url: Url,
    auth: Auth,
}

impl KeycloakClient {
    /// Client for the provider at `base_url` with default HTTP tuning and
    /// tracing-backed monitoring.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_config(base_url, &HttpClientConfig::default())
    }

    /// Client with explicit HTTP tuning.
    pub fn with_config(base_url: &str, config: &HttpClientConfig) -> Result<Self, ClientError> {
        Self::build(base_url, config, Arc::new(TracingSink))
    }

    /// Client with an injected monitoring sink.
    pub fn with_monitoring_sink(
        base_url: &str,
        config: &HttpClientConfig,
        sink: Arc<dyn MonitoringSink>,
    ) -> Result<Self, ClientError> {
        Self::build(base_url, config, sink)
    }

    fn build(
        base_url: &str,
        config: &HttpClientConfig,
        sink: Arc<dyn MonitoringSink>,
    ) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::ConfigError(format!(
                "unsupported base URL scheme: {}",
                base_url.scheme()
            )));
        }

        let transport = Transport::new(config.build()?);

        Ok(Self {
            auth: Auth::new(base_url.clone(), transport, sink),
            base_url,
        })
    }

    /// The authentication module: token grants, refresh and revocation.
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
