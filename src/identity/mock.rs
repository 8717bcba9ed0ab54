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
use mockall::mock;

use crate::config::Config;
use crate::fence::ServiceState;
use crate::identity::IdentityApi;
use crate::identity::error::IdentityProviderError;
use crate::identity::types::{Group, GroupCreate, GroupUpdate, User, UserCreate};
use crate::plugin_manager::PluginManager;

mock! {
    pub IdentityProvider {
        pub fn new(cfg: &Config, plugin_manager: &PluginManager) -> Result<Self, IdentityProviderError>;
    }

    #[async_trait]
    impl IdentityApi for IdentityProvider {
        async fn list_users(
            &self,
            state: &ServiceState,
        ) -> Result<Vec<User>, IdentityProviderError>;

        async fn get_user<'a>(
            &self,
            state: &ServiceState,
            username: &'a str,
        ) -> Result<Option<User>, IdentityProviderError>;

        async fn create_user(
            &self,
            state: &ServiceState,
            user: UserCreate,
        ) -> Result<User, IdentityProviderError>;

        async fn delete_user<'a>(
            &self,
            state: &ServiceState,
            username: &'a str,
        ) -> Result<(), IdentityProviderError>;

        async fn list_groups(
            &self,
            state: &ServiceState,
        ) -> Result<Vec<Group>, IdentityProviderError>;

        async fn get_group<'a>(
            &self,
            state: &ServiceState,
            name: &'a str,
        ) -> Result<Option<Group>, IdentityProviderError>;

        async fn create_group(
            &self,
            state: &ServiceState,
            group: GroupCreate,
        ) -> Result<Group, IdentityProviderError>;

        async fn update_group<'a>(
            &self,
            state: &ServiceState,
            name: &'a str,
            group: GroupUpdate,
        ) -> Result<Group, IdentityProviderError>;

        async fn delete_group<'a>(
            &self,
            state: &ServiceState,
            name: &'a str,
        ) -> Result<(), IdentityProviderError>;

        async fn list_group_users<'a>(
            &self,
            state: &ServiceState,
            group_name: &'a str,
        ) -> Result<Vec<User>, IdentityProviderError>;

        async fn list_user_groups<'a>(
            &self,
            state: &ServiceState,
            username: &'a str,
        ) -> Result<Vec<Group>, IdentityProviderError>;

        async fn add_user_to_group<'a>(
            &self,
            state: &ServiceState,
            username: &'a str,
            group_name: &'a str,
        ) -> Result<(), IdentityProviderError>;

        async fn remove_user_from_group<'a>(
            &self,
            state: &ServiceState,
            username: &'a str,
            group_name: &'a str,
        ) -> Result<(), IdentityProviderError>;
    }

    impl Clone for IdentityProvider {
        fn clone(&self) -> Self;
    }
}
