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

use async_trait::async_trait;

mod group;
mod user;
mod user_group;

use super::IdentityBackend;
use crate::fence::ServiceState;
use crate::identity::IdentityProviderError;
use crate::identity::types::*;

#[derive(Clone, Debug, Default)]
pub struct SqlBackend {}

#[async_trait]
impl IdentityBackend for SqlBackend {
    /// Fetch users from the database
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn list_users(&self, state: &ServiceState) -> Result<Vec<User>, IdentityProviderError> {
        Ok(user::list(&state.db).await?)
    }

    /// Get single user by name
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn get_user<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
    ) -> Result<Option<User>, IdentityProviderError> {
        Ok(user::get_by_name(&state.db, username).await?)
    }

    /// Create user
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn create_user(
        &self,
        state: &ServiceState,
        user: UserCreate,
    ) -> Result<User, IdentityProviderError> {
        Ok(user::create(&state.db, user).await?)
    }

    /// Delete user
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn delete_user<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
    ) -> Result<(), IdentityProviderError> {
        Ok(user::delete(&state.db, username).await?)
    }

    /// List groups
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn list_groups(
        &self,
        state: &ServiceState,
    ) -> Result<Vec<Group>, IdentityProviderError> {
        Ok(group::list(&state.db).await?)
    }

    /// Get single group by name
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn get_group<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<Option<Group>, IdentityProviderError> {
        Ok(group::get_by_name(&state.db, name).await?)
    }

    /// Create group
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn create_group(
        &self,
        state: &ServiceState,
        group: GroupCreate,
    ) -> Result<Group, IdentityProviderError> {
        Ok(group::create(&state.db, group).await?)
    }

    /// Update group
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn update_group<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
        group: GroupUpdate,
    ) -> Result<Group, IdentityProviderError> {
        Ok(group::update(&state.db, name, group).await?)
    }

    /// Delete group
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn delete_group<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<(), IdentityProviderError> {
        Ok(group::delete(&state.db, name).await?)
    }

    /// List members of the group
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn list_group_users<'a>(
        &self,
        state: &ServiceState,
        group_name: &'a str,
    ) -> Result<Vec<User>, IdentityProviderError> {
        Ok(user_group::list_group_users(&state.db, group_name).await?)
    }

    /// List groups of the user
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn list_user_groups<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
    ) -> Result<Vec<Group>, IdentityProviderError> {
        Ok(user_group::list_user_groups(&state.db, username).await?)
    }

    /// Add the user to the group
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn add_user_to_group<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
        group_name: &'a str,
    ) -> Result<(), IdentityProviderError> {
        Ok(user_group::add(&state.db, username, group_name).await?)
    }

    /// Remove the user from the group
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn remove_user_from_group<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
        group_name: &'a str,
    ) -> Result<(), IdentityProviderError> {
        Ok(user_group::remove(&state.db, username, group_name).await?)
    }
}
