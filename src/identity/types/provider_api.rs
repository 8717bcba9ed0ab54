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

use crate::fence::ServiceState;
use crate::identity::IdentityProviderError;
use crate::identity::types::group::*;
use crate::identity::types::user::*;

/// Identity API: users, groups and the group memberships.
#[async_trait]
pub trait IdentityApi: Send + Sync {
    /// List all users.
    async fn list_users(&self, state: &ServiceState) -> Result<Vec<User>, IdentityProviderError>;

    /// Get a user by the `username`.
    async fn get_user<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
    ) -> Result<Option<User>, IdentityProviderError>;

    /// Create a new user.
    async fn create_user(
        &self,
        state: &ServiceState,
        user: UserCreate,
    ) -> Result<User, IdentityProviderError>;

    /// Delete the user together with the group memberships and access privileges.
    async fn delete_user<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
    ) -> Result<(), IdentityProviderError>;

    /// List all groups.
    async fn list_groups(&self, state: &ServiceState)
    -> Result<Vec<Group>, IdentityProviderError>;

    /// Get a group by the `name`.
    async fn get_group<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<Option<Group>, IdentityProviderError>;

    /// Create a new group.
    async fn create_group(
        &self,
        state: &ServiceState,
        group: GroupCreate,
    ) -> Result<Group, IdentityProviderError>;

    /// Change the description of the group.
    async fn update_group<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
        group: GroupUpdate,
    ) -> Result<Group, IdentityProviderError>;

    /// Delete the group together with its memberships and access privileges.
    async fn delete_group<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<(), IdentityProviderError>;

    /// List members of the group.
    async fn list_group_users<'a>(
        &self,
        state: &ServiceState,
        group_name: &'a str,
    ) -> Result<Vec<User>, IdentityProviderError>;

    /// List groups the user is a member of.
    async fn list_user_groups<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
    ) -> Result<Vec<Group>, IdentityProviderError>;

    /// Add user to the group.
    async fn add_user_to_group<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
        group_name: &'a str,
    ) -> Result<(), IdentityProviderError>;

    /// Remove user from the group.
    async fn remove_user_from_group<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
        group_name: &'a str,
    ) -> Result<(), IdentityProviderError>;
}
