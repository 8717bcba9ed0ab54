// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0
//! # Federation provider
//!
//! Federated login against the upstream OpenID Connect provider:
//!
//! - login sessions binding the anti-forgery state, the post login target and
//!   finally the authenticated user to the browser,
//! - the OAuth2 client of the upstream provider and the identity token
//!   validator,
//! - the login orchestration.

use async_trait::async_trait;
use std::sync::Arc;

pub mod backend;
pub mod error;
pub mod jwt;
pub mod login;
#[cfg(test)]
mod mock;
pub mod oauth;
pub mod redirect;
pub mod types;

use crate::config::Config;
use crate::federation::backend::{FederationBackend, sql::SqlBackend};
use crate::federation::error::FederationProviderError;
use crate::federation::jwt::IdTokenValidator;
use crate::federation::oauth::OAuthClient;
use crate::federation::types::*;
use crate::fence::ServiceState;
use crate::plugin_manager::PluginManager;

#[cfg(test)]
pub use mock::MockFederationProvider;
pub use types::FederationApi;

/// Upstream identity provider clients.
#[derive(Clone)]
pub struct Upstream {
    pub oauth_client: Arc<dyn OAuthClient>,
    pub id_token_validator: Arc<dyn IdTokenValidator>,
}

#[derive(Clone)]
pub struct FederationProvider {
    backend_driver: Arc<dyn FederationBackend>,
}

impl FederationProvider {
    pub fn new(
        config: &Config,
        plugin_manager: &PluginManager,
    ) -> Result<Self, FederationProviderError> {
        let backend_driver = if let Some(driver) =
            plugin_manager.get_federation_backend(config.federation.driver.clone())
        {
            driver.clone()
        } else {
            match config.federation.driver.as_str() {
                "sql" => Arc::new(SqlBackend::default()),
                _ => {
                    return Err(FederationProviderError::UnsupportedDriver(
                        config.federation.driver.clone(),
                    ));
                }
            }
        };
        Ok(Self { backend_driver })
    }
}

#[async_trait]
impl FederationApi for FederationProvider {
    /// Get login session
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn get_login_session<'a>(
        &self,
        state: &ServiceState,
        id: &'a str,
    ) -> Result<Option<LoginSession>, FederationProviderError> {
        self.backend_driver.get_login_session(state, id).await
    }

    /// Save login session
    #[tracing::instrument(level = "info", skip(self, state, session), fields(id = %session.id))]
    async fn save_login_session(
        &self,
        state: &ServiceState,
        session: LoginSession,
    ) -> Result<LoginSession, FederationProviderError> {
        self.backend_driver.save_login_session(state, session).await
    }

    /// Delete login session
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn delete_login_session<'a>(
        &self,
        state: &ServiceState,
        id: &'a str,
    ) -> Result<(), FederationProviderError> {
        self.backend_driver.delete_login_session(state, id).await
    }

    /// Cleanup expired login sessions
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn cleanup_expired_sessions(
        &self,
        state: &ServiceState,
    ) -> Result<u64, FederationProviderError> {
        self.backend_driver.cleanup_expired_sessions(state).await
    }
}
