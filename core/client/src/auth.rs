// Copyright Keycloak Client Contributors
// SPDX-License-Identifier: Apache-2.0

//! Grant-type flows against the identity provider's token endpoint.
//!
//! Every operation is a single request-response exchange: inputs are
//! validated before anything touches the network, the provider's answer is
//! classified into an [`ApiResponse`] envelope purely by HTTP status, and
//! the envelope is handed back to the caller. No retries, no token
//! caching; the caller decides what to do with a failed refresh.

use std::sync::Arc;

use http::Method;
use url::Url;

use crate::credentials::{ClientCredentials, UserLogin};
use crate::errors::ClientError;
use crate::grant::{GrantRequest, TokenTypeHint};
use crate::monitoring::MonitoringSink;
use crate::response::ApiResponse;
use crate::token::IdentityProviderToken;
use crate::transport::Transport;

/// Token endpoint path relative to a realm.
const TOKEN_ENDPOINT: &str = "protocol/openid-connect/token";
/// Revocation endpoint path relative to a realm.
const REVOCATION_ENDPOINT: &str = "protocol/openid-connect/revoke";

/// The authentication module of the client facade.
///
/// Holds no cross-call state beyond the transport's connection pool, so
/// calls may be issued concurrently.
pub struct Auth {
    base_url: Url,
    transport: Transport,
    sink: Arc<dyn MonitoringSink>,
}

impl Auth {
    pub(crate) fn new(base_url: Url, transport: Transport, sink: Arc<dyn MonitoringSink>) -> Self {
        Self {
            base_url,
            transport,
            sink,
        }
    }

    /// Obtain tokens through the resource owner password grant.
    ///
    /// Success (HTTP 200) yields an envelope carrying the parsed token
    /// payload; any non-2xx answer yields an error envelope with the
    /// provider's error description. Only validation and transport
    /// failures produce an `Err`.
    pub async fn get_resource_owner_password_token(
        &self,
        realm: &str,
        credentials: &ClientCredentials,
        login: &UserLogin,
    ) -> Result<ApiResponse<IdentityProviderToken>, ClientError> {
        validate_realm(realm)?;
        credentials.validate()?;
        login.validate()?;

        tracing::debug!(realm, client_id = %credentials.client_id, "requesting resource owner password token");

        let url = self.realm_endpoint(realm, TOKEN_ENDPOINT)?;
        self.token_call(url, GrantRequest::password(credentials, login))
            .await
    }

    /// Exchange a refresh token for a new token pair.
    ///
    /// `refresh_token` must be a refresh token, not an access token; the
    /// provider answers the latter with HTTP 400, which is surfaced as an
    /// error envelope, not an `Err`. Whether the returned payload rotates
    /// the refresh token is provider policy.
    pub async fn refresh_access_token(
        &self,
        realm: &str,
        credentials: &ClientCredentials,
        refresh_token: &str,
    ) -> Result<ApiResponse<IdentityProviderToken>, ClientError> {
        validate_realm(realm)?;
        credentials.validate()?;
        if refresh_token.is_empty() {
            return Err(ClientError::ValidationError(
                "refresh_token must not be empty".to_string(),
            ));
        }

        tracing::debug!(realm, client_id = %credentials.client_id, "refreshing access token");

        let url = self.realm_endpoint(realm, TOKEN_ENDPOINT)?;
        self.token_call(url, GrantRequest::refresh_token(credentials, refresh_token))
            .await
    }

    /// Obtain tokens through the client credentials grant.
    ///
    /// Requires a confidential client: a `client_secret` must be present.
    pub async fn get_client_credentials_token(
        &self,
        realm: &str,
        credentials: &ClientCredentials,
    ) -> Result<ApiResponse<IdentityProviderToken>, ClientError> {
        validate_realm(realm)?;
        credentials.validate()?;
        if credentials.client_secret.is_none() {
            return Err(ClientError::ValidationError(
                "client_secret is required for the client_credentials grant".to_string(),
            ));
        }

        tracing::debug!(realm, client_id = %credentials.client_id, "requesting client credentials token");

        let url = self.realm_endpoint(realm, TOKEN_ENDPOINT)?;
        self.token_call(url, GrantRequest::client_credentials(credentials))
            .await
    }

    /// Revoke a token at the realm's revocation endpoint.
    ///
    /// The provider treats revocation of an unknown token as success, per
    /// RFC 7009; an error envelope here means the request itself was
    /// rejected (e.g. bad client authentication).
    pub async fn revoke_token(
        &self,
        realm: &str,
        credentials: &ClientCredentials,
        token: &str,
        hint: Option<TokenTypeHint>,
    ) -> Result<ApiResponse<()>, ClientError> {
        validate_realm(realm)?;
        credentials.validate()?;
        if token.is_empty() {
            return Err(ClientError::ValidationError(
                "token must not be empty".to_string(),
            ));
        }

        tracing::debug!(realm, client_id = %credentials.client_id, "revoking token");

        let url = self.realm_endpoint(realm, REVOCATION_ENDPOINT)?;
        let exchange = self
            .transport
            .post_form(url.as_str(), GrantRequest::revocation(credentials, token, hint).form())
            .await?;

        let envelope = ApiResponse::from_empty_exchange(&exchange, Method::POST, url.as_str());
        self.sink.record(envelope.monitoring_metrics());
        Ok(envelope)
    }

    async fn token_call(
        &self,
        url: Url,
        request: GrantRequest,
    ) -> Result<ApiResponse<IdentityProviderToken>, ClientError> {
        let exchange = self.transport.post_form(url.as_str(), request.form()).await?;

        let envelope =
            ApiResponse::<IdentityProviderToken>::from_exchange(&exchange, Method::POST, url.as_str())
                .validated(|token| {
                    if token.access_token.is_empty() {
                        Err("provider returned a token payload without an access token".to_string())
                    } else {
                        Ok(())
                    }
                });

        self.sink.record(envelope.monitoring_metrics());
        Ok(envelope)
    }

    fn realm_endpoint(&self, realm: &str, endpoint: &str) -> Result<Url, ClientError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}/realms/{}/{}", base, realm, endpoint))?)
    }
}

fn validate_realm(realm: &str) -> Result<(), ClientError> {
    if realm.trim().is_empty() {
        return Err(ClientError::ValidationError(
            "realm must not be empty".to_string(),
        ));
    }
    Ok(())
}
