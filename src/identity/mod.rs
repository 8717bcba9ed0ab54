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

//! # Identity provider
//!
//! Following identity concepts are covered by the identity provider:
//!
//! ## User
//!
//! A person known to the gateway. Users are created on their first federated
//! login and are identified by the unique `username`. Administrators
//! (`is_admin`) may use the administrative API.
//!
//! ## Group
//!
//! A named collection of users. Access privileges granted to a group on a
//! project apply to every member of the group.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

pub mod backend;
pub mod error;
#[cfg(test)]
mod mock;
pub mod types;

use crate::config::Config;
use crate::fence::ServiceState;
use crate::identity::backend::{IdentityBackend, sql::SqlBackend};
use crate::identity::error::IdentityProviderError;
use crate::identity::types::{Group, GroupCreate, GroupUpdate, User, UserCreate};
use crate::plugin_manager::PluginManager;

#[cfg(test)]
pub use mock::MockIdentityProvider;
pub use types::IdentityApi;

#[derive(Clone)]
pub struct IdentityProvider {
    backend_driver: Arc<dyn IdentityBackend>,
}

impl IdentityProvider {
    pub fn new(
        config: &Config,
        plugin_manager: &PluginManager,
    ) -> Result<Self, IdentityProviderError> {
        let backend_driver = if let Some(driver) =
            plugin_manager.get_identity_backend(config.identity.driver.clone())
        {
            driver.clone()
        } else {
            match config.identity.driver.as_str() {
                "sql" => Arc::new(SqlBackend::default()),
                _ => {
                    return Err(IdentityProviderError::UnsupportedDriver(
                        config.identity.driver.clone(),
                    ));
                }
            }
        };
        Ok(Self { backend_driver })
    }
}

#[async_trait]
impl IdentityApi for IdentityProvider {
    /// List users
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn list_users(&self, state: &ServiceState) -> Result<Vec<User>, IdentityProviderError> {
        self.backend_driver.list_users(state).await
    }

    /// Get single user
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn get_user<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
    ) -> Result<Option<User>, IdentityProviderError> {
        self.backend_driver.get_user(state, username).await
    }

    /// Create user
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn create_user(
        &self,
        state: &ServiceState,
        user: UserCreate,
    ) -> Result<User, IdentityProviderError> {
        user.validate()?;
        self.backend_driver.create_user(state, user).await
    }

    /// Delete user
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn delete_user<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
    ) -> Result<(), IdentityProviderError> {
        self.backend_driver.delete_user(state, username).await
    }

    /// List groups
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn list_groups(
        &self,
        state: &ServiceState,
    ) -> Result<Vec<Group>, IdentityProviderError> {
        self.backend_driver.list_groups(state).await
    }

    /// Get single group
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn get_group<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<Option<Group>, IdentityProviderError> {
        self.backend_driver.get_group(state, name).await
    }

    /// Create group
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn create_group(
        &self,
        state: &ServiceState,
        group: GroupCreate,
    ) -> Result<Group, IdentityProviderError> {
        group.validate()?;
        self.backend_driver.create_group(state, group).await
    }

    /// Update group
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn update_group<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
        group: GroupUpdate,
    ) -> Result<Group, IdentityProviderError> {
        group.validate()?;
        self.backend_driver.update_group(state, name, group).await
    }

    /// Delete group
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn delete_group<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<(), IdentityProviderError> {
        self.backend_driver.delete_group(state, name).await
    }

    #[tracing::instrument(level = "info", skip(self, state))]
    async fn list_group_users<'a>(
        &self,
        state: &ServiceState,
        group_name: &'a str,
    ) -> Result<Vec<User>, IdentityProviderError> {
        self.backend_driver
            .list_group_users(state, group_name)
            .await
    }

    #[tracing::instrument(level = "info", skip(self, state))]
    async fn list_user_groups<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
    ) -> Result<Vec<Group>, IdentityProviderError> {
        self.backend_driver.list_user_groups(state, username).await
    }

    #[tracing::instrument(level = "info", skip(self, state))]
    async fn add_user_to_group<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
        group_name: &'a str,
    ) -> Result<(), IdentityProviderError> {
        self.backend_driver
            .add_user_to_group(state, username, group_name)
            .await
    }

    #[tracing::instrument(level = "info", skip(self, state))]
    async fn remove_user_from_group<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
        group_name: &'a str,
    ) -> Result<(), IdentityProviderError> {
        self.backend_driver
            .remove_user_from_group(state, username, group_name)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_driver() {
        let mut config = Config::default();
        config.identity.driver = "ldap".into();
        match IdentityProvider::new(&config, &PluginManager::default()) {
            Err(IdentityProviderError::UnsupportedDriver(x)) => assert_eq!("ldap", x),
            _ => panic!("unsupported driver error expected"),
        }
    }
}
