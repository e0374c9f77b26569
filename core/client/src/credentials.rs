// Copyright Keycloak Client Contributors
// SPDX-License-Identifier: Apache-2.0

//! Value objects identifying the OAuth client and the resource owner.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::ClientError;

/// OAuth client identity presented to the token endpoint.
///
/// Immutable per request; construct a fresh value for each call.
#[derive(Clone, Serialize, Deserialize, JsonSchema)]
pub struct ClientCredentials {
    /// OAuth2 client ID
    pub client_id: String,

    /// Client secret, required only for confidential clients
    #[schemars(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}

impl ClientCredentials {
    /// Credentials for a public client (no secret).
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: None,
        }
    }

    /// Credentials for a confidential client.
    pub fn with_secret(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: Some(client_secret.into()),
        }
    }

    /// Fails fast before any network call is attempted.
    pub(crate) fn validate(&self) -> Result<(), ClientError> {
        if self.client_id.trim().is_empty() {
            return Err(ClientError::ValidationError(
                "client_id must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Resource owner login used by the password grant.
///
/// Never persisted beyond the call that consumes it.
#[derive(Clone, Serialize, Deserialize, JsonSchema)]
pub struct UserLogin {
    /// Username of the resource owner
    pub username: String,

    /// Password of the resource owner
    #[schemars(skip)]
    pub password: String,
}

impl UserLogin {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ClientError> {
        if self.username.trim().is_empty() {
            return Err(ClientError::ValidationError(
                "username must not be empty".to_string(),
            ));
        }
        if self.password.is_empty() {
            return Err(ClientError::ValidationError(
                "password must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for UserLogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserLogin")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_client_id_is_rejected() {
        assert!(ClientCredentials::new("").validate().is_err());
        assert!(ClientCredentials::new("   ").validate().is_err());
        assert!(ClientCredentials::new("public-client").validate().is_ok());
    }

    #[test]
    fn login_requires_both_fields() {
        assert!(UserLogin::new("", "secret").validate().is_err());
        assert!(UserLogin::new("alice", "").validate().is_err());
        assert!(UserLogin::new("alice", "secret").validate().is_ok());
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let credentials = ClientCredentials::with_secret("confidential", "hunter2");
        let rendered = format!("{:?}", credentials);
        assert!(rendered.contains("confidential"));
        assert!(!rendered.contains("hunter2"));

        let login = UserLogin::new("alice", "hunter2");
        let rendered = format!("{:?}", login);
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
    }
}
