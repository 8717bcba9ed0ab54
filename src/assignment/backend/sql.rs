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

mod access_privilege;
mod group_project;
mod lookup;
mod user_project;

use super::AssignmentBackend;
use crate::assignment::AssignmentProviderError;
use crate::assignment::types::*;
use crate::fence::ServiceState;

#[derive(Clone, Debug, Default)]
pub struct SqlBackend {}

#[async_trait]
impl AssignmentBackend for SqlBackend {
    /// Grant the user privileges on the project
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn grant_user_project<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
        grant: UserProjectGrant,
    ) -> Result<AccessPrivilege, AssignmentProviderError> {
        Ok(user_project::grant(&state.db, username, grant).await?)
    }

    /// Revoke the user access to the project
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn revoke_user_project<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
        project_name: &'a str,
    ) -> Result<(), AssignmentProviderError> {
        Ok(user_project::revoke(&state.db, username, project_name).await?)
    }

    /// List projects of the user
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn list_user_projects<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
    ) -> Result<Vec<ProjectAccess>, AssignmentProviderError> {
        Ok(user_project::list(&state.db, username).await?)
    }

    /// Connect the group to the project
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn add_project_to_group<'a>(
        &self,
        state: &ServiceState,
        group_name: &'a str,
        project_name: &'a str,
        privilege: Vec<String>,
    ) -> Result<AccessPrivilege, AssignmentProviderError> {
        Ok(group_project::add(&state.db, group_name, project_name, privilege).await?)
    }

    /// Disconnect the group from the project
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn remove_project_from_group<'a>(
        &self,
        state: &ServiceState,
        group_name: &'a str,
        project_name: &'a str,
    ) -> Result<(), AssignmentProviderError> {
        Ok(group_project::remove(&state.db, group_name, project_name).await?)
    }

    /// List projects of the group
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn list_group_projects<'a>(
        &self,
        state: &ServiceState,
        group_name: &'a str,
    ) -> Result<Vec<String>, AssignmentProviderError> {
        Ok(group_project::list(&state.db, group_name).await?)
    }
}
