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

pub mod error;
pub mod sql;

use crate::assignment::AssignmentProviderError;
use crate::assignment::types::*;
use crate::fence::ServiceState;

/// Assignment backend driver.
#[async_trait]
pub trait AssignmentBackend: Send + Sync {
    /// Grant the user privileges on the project identified by the `auth_id`.
    async fn grant_user_project<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
        grant: UserProjectGrant,
    ) -> Result<AccessPrivilege, AssignmentProviderError>;

    /// Revoke the user access to the project.
    async fn revoke_user_project<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
        project_name: &'a str,
    ) -> Result<(), AssignmentProviderError>;

    /// List projects the user has direct access to.
    async fn list_user_projects<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
    ) -> Result<Vec<ProjectAccess>, AssignmentProviderError>;

    /// Connect the group to the project.
    async fn add_project_to_group<'a>(
        &self,
        state: &ServiceState,
        group_name: &'a str,
        project_name: &'a str,
        privilege: Vec<String>,
    ) -> Result<AccessPrivilege, AssignmentProviderError>;

    /// Disconnect the group from the project.
    async fn remove_project_from_group<'a>(
        &self,
        state: &ServiceState,
        group_name: &'a str,
        project_name: &'a str,
    ) -> Result<(), AssignmentProviderError>;

    /// List names of the projects connected to the group.
    async fn list_group_projects<'a>(
        &self,
        state: &ServiceState,
        group_name: &'a str,
    ) -> Result<Vec<String>, AssignmentProviderError>;
}
