// Copyright Keycloak Client Contributors
// SPDX-License-Identifier: Apache-2.0

//! Client for the Keycloak identity provider's OpenID Connect token endpoint.
//!
//! The crate covers the token lifecycle only: obtaining tokens through the
//! resource owner password and client credentials grants, refreshing them,
//! and revoking them. Every operation returns an [`ApiResponse`] envelope
//! that carries either the parsed provider payload or the provider's error
//! description, always together with per-request monitoring metrics.
//! Only connectivity-level failures surface as [`ClientError`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use kc_client::KeycloakClient;
//! use kc_client::credentials::{ClientCredentials, UserLogin};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = KeycloakClient::new("https://auth.example.com")?;
//!
//! let tokens = client
//!     .auth()
//!     .get_resource_owner_password_token(
//!         "my-realm",
//!         &ClientCredentials::new("my-client"),
//!         &UserLogin::new("alice", "secret"),
//!     )
//!     .await?;
//!
//! if let Some(token) = tokens.response() {
//!     println!("access token: {}", token.access_token);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod credentials;
pub mod errors;
pub mod grant;
pub mod monitoring;
pub mod response;
pub mod token;

mod transport;

pub use client::KeycloakClient;
pub use errors::ClientError;
pub use response::ApiResponse;
pub use token::IdentityProviderToken;
