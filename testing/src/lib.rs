// Copyright Keycloak Client Contributors
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for the Keycloak client: a wiremock-backed mock identity
//! provider and the assertions shared across the integration suite.

pub mod assertions;
pub mod mock_provider;

pub use mock_provider::MockProvider;
