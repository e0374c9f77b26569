// Copyright Keycloak Client Contributors
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Token payload returned by the identity provider on a successful grant.
///
/// A successful envelope always carries a non-empty `access_token`;
/// everything else depends on the realm and client configuration. Whether
/// `refresh_token` rotates on refresh is provider policy, so callers must
/// not assume the previous value stays valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityProviderToken {
    /// Short-lived credential authorizing API calls
    pub access_token: String,

    /// Longer-lived credential used solely to obtain a new access token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Token type, typically "Bearer"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,

    /// Access token lifetime in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,

    /// Refresh token lifetime in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_expires_in: Option<u64>,

    /// Granted scopes (space-separated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Provider session identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_state: Option<String>,
}

impl IdentityProviderToken {
    /// Whether the payload carries a refresh token.
    pub fn has_refresh_token(&self) -> bool {
        self.refresh_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}
