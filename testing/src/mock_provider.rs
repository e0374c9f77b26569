// Copyright Keycloak Client Contributors
// SPDX-License-Identifier: Apache-2.0

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A stand-in for one realm of an identity provider.
///
/// Each `grant_*`/`reject_*` call mounts an expectation on the realm's
/// token endpoint keyed on the form values the client is expected to send,
/// so a test can script an entire token lifecycle up front and then drive
/// the real client against it.
pub struct MockProvider {
    server: MockServer,
    realm: String,
}

impl MockProvider {
    pub async fn start(realm: &str) -> Self {
        Self {
            server: MockServer::start().await,
            realm: realm.to_string(),
        }
    }

    /// Base URL to hand to the client under test.
    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    fn token_path(&self) -> String {
        format!("/realms/{}/protocol/openid-connect/token", self.realm)
    }

    fn revocation_path(&self) -> String {
        format!("/realms/{}/protocol/openid-connect/revoke", self.realm)
    }

    /// Token endpoint success payload with the given token values.
    pub fn token_payload(access_token: &str, refresh_token: &str) -> serde_json::Value {
        json!({
            "access_token": access_token,
            "refresh_token": refresh_token,
            "token_type": "Bearer",
            "expires_in": 300,
            "refresh_expires_in": 1800,
            "scope": "openid"
        })
    }

    /// Answer a password grant for `username` with the given token pair.
    pub async fn grant_password(&self, username: &str, access_token: &str, refresh_token: &str) {
        Mock::given(method("POST"))
            .and(path(self.token_path()))
            .and(body_string_contains("grant_type=password"))
            .and(body_string_contains(format!("username={}", username)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(Self::token_payload(access_token, refresh_token)),
            )
            .mount(&self.server)
            .await;
    }

    /// Answer a refresh of exactly `presented` with a new token pair.
    ///
    /// The exchange consumes the presented token, mimicking rotation: a
    /// second presentation falls through to whatever rejection is mounted.
    pub async fn grant_refresh(&self, presented: &str, access_token: &str, refresh_token: &str) {
        Mock::given(method("POST"))
            .and(path(self.token_path()))
            .and(body_string_contains("grant_type=refresh_token"))
            .and(body_string_contains(format!("refresh_token={}", presented)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(Self::token_payload(access_token, refresh_token)),
            )
            .up_to_n_times(1)
            .mount(&self.server)
            .await;
    }

    /// Reject a refresh of exactly `presented` with HTTP 400, the way the
    /// provider answers expired, rotated-away or wrong-type tokens.
    pub async fn reject_refresh(&self, presented: &str, description: &str) {
        Mock::given(method("POST"))
            .and(path(self.token_path()))
            .and(body_string_contains("grant_type=refresh_token"))
            .and(body_string_contains(format!("refresh_token={}", presented)))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": description
            })))
            .mount(&self.server)
            .await;
    }

    /// Accept revocation of exactly `presented`.
    pub async fn accept_revocation(&self, presented: &str) {
        Mock::given(method("POST"))
            .and(path(self.revocation_path()))
            .and(body_string_contains(format!("token={}", presented)))
            .respond_with(ResponseTemplate::new(200))
            .mount(&self.server)
            .await;
    }
}
