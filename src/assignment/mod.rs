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
//! # Assignment provider
//!
//! Access privileges of users and groups on projects. A privilege is a list
//! of free-form actions (`read`, `write`, `read-storage`, ...) granted
//! directly to a user or to a group. Members of the group inherit the group
//! privileges.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

pub mod backend;
pub mod error;
#[cfg(test)]
mod mock;
pub mod types;

use crate::assignment::backend::{AssignmentBackend, sql::SqlBackend};
use crate::assignment::error::AssignmentProviderError;
use crate::assignment::types::*;
use crate::config::Config;
use crate::fence::ServiceState;
use crate::plugin_manager::PluginManager;

#[cfg(test)]
pub use mock::MockAssignmentProvider;
pub use types::AssignmentApi;

#[derive(Clone)]
pub struct AssignmentProvider {
    backend_driver: Arc<dyn AssignmentBackend>,
}

impl AssignmentProvider {
    pub fn new(
        config: &Config,
        plugin_manager: &PluginManager,
    ) -> Result<Self, AssignmentProviderError> {
        let backend_driver = if let Some(driver) =
            plugin_manager.get_assignment_backend(config.assignment.driver.clone())
        {
            driver.clone()
        } else {
            match config.assignment.driver.as_str() {
                "sql" => Arc::new(SqlBackend::default()),
                _ => {
                    return Err(AssignmentProviderError::UnsupportedDriver(
                        config.assignment.driver.clone(),
                    ));
                }
            }
        };
        Ok(Self { backend_driver })
    }
}

#[async_trait]
impl AssignmentApi for AssignmentProvider {
    /// Grant the user privileges on the project
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn grant_user_project<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
        grant: UserProjectGrant,
    ) -> Result<AccessPrivilege, AssignmentProviderError> {
        grant.validate()?;
        self.backend_driver
            .grant_user_project(state, username, grant)
            .await
    }

    /// Revoke the user access to the project
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn revoke_user_project<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
        project_name: &'a str,
    ) -> Result<(), AssignmentProviderError> {
        self.backend_driver
            .revoke_user_project(state, username, project_name)
            .await
    }

    #[tracing::instrument(level = "info", skip(self, state))]
    async fn list_user_projects<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
    ) -> Result<Vec<ProjectAccess>, AssignmentProviderError> {
        self.backend_driver.list_user_projects(state, username).await
    }

    /// Connect the group to the project
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn add_project_to_group<'a>(
        &self,
        state: &ServiceState,
        group_name: &'a str,
        project_name: &'a str,
        privilege: Vec<String>,
    ) -> Result<AccessPrivilege, AssignmentProviderError> {
        self.backend_driver
            .add_project_to_group(state, group_name, project_name, privilege)
            .await
    }

    /// Disconnect the group from the project
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn remove_project_from_group<'a>(
        &self,
        state: &ServiceState,
        group_name: &'a str,
        project_name: &'a str,
    ) -> Result<(), AssignmentProviderError> {
        self.backend_driver
            .remove_project_from_group(state, group_name, project_name)
            .await
    }

    #[tracing::instrument(level = "info", skip(self, state))]
    async fn list_group_projects<'a>(
        &self,
        state: &ServiceState,
        group_name: &'a str,
    ) -> Result<Vec<String>, AssignmentProviderError> {
        self.backend_driver
            .list_group_projects(state, group_name)
            .await
    }
}
