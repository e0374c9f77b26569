// Copyright Keycloak Client Contributors
// SPDX-License-Identifier: Apache-2.0

//! Grant parameters: the form-encoded bodies sent to the token and
//! revocation endpoints.

use std::fmt;

use crate::credentials::{ClientCredentials, UserLogin};

/// OAuth2 grant types supported by this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantType {
    /// Resource owner password grant
    Password,
    /// Refresh token exchange
    RefreshToken,
    /// Service-to-service client credentials grant
    ClientCredentials,
}

impl GrantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantType::Password => "password",
            GrantType::RefreshToken => "refresh_token",
            GrantType::ClientCredentials => "client_credentials",
        }
    }
}

/// Hint accompanying a revocation request, per RFC 7009.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenTypeHint {
    AccessToken,
    RefreshToken,
}

impl TokenTypeHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenTypeHint::AccessToken => "access_token",
            TokenTypeHint::RefreshToken => "refresh_token",
        }
    }
}

/// Ordered form pairs for one endpoint call.
pub(crate) struct GrantRequest {
    pairs: Vec<(&'static str, String)>,
}

impl GrantRequest {
    fn new(grant_type: GrantType, credentials: &ClientCredentials) -> Self {
        let mut pairs = vec![
            ("grant_type", grant_type.as_str().to_string()),
            ("client_id", credentials.client_id.clone()),
        ];
        if let Some(secret) = &credentials.client_secret {
            pairs.push(("client_secret", secret.clone()));
        }
        GrantRequest { pairs }
    }

    pub(crate) fn password(credentials: &ClientCredentials, login: &UserLogin) -> Self {
        let mut request = Self::new(GrantType::Password, credentials);
        request.pairs.push(("username", login.username.clone()));
        request.pairs.push(("password", login.password.clone()));
        request
    }

    pub(crate) fn refresh_token(credentials: &ClientCredentials, refresh_token: &str) -> Self {
        let mut request = Self::new(GrantType::RefreshToken, credentials);
        request.pairs.push(("refresh_token", refresh_token.to_string()));
        request
    }

    pub(crate) fn client_credentials(credentials: &ClientCredentials) -> Self {
        Self::new(GrantType::ClientCredentials, credentials)
    }

    /// Revocation is not a grant, but shares the client-auth form fields.
    pub(crate) fn revocation(
        credentials: &ClientCredentials,
        token: &str,
        hint: Option<TokenTypeHint>,
    ) -> Self {
        let mut pairs = vec![("client_id", credentials.client_id.clone())];
        if let Some(secret) = &credentials.client_secret {
            pairs.push(("client_secret", secret.clone()));
        }
        pairs.push(("token", token.to_string()));
        if let Some(hint) = hint {
            pairs.push(("token_type_hint", hint.as_str().to_string()));
        }
        GrantRequest { pairs }
    }

    pub(crate) fn form(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}

impl fmt::Debug for GrantRequest {
    // form values carry passwords and tokens; expose keys only
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.pairs.iter().map(|(key, _)| key))
            .finish()
    }
}
