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

//! # Resource provider
//!
//! Following concepts are covered by the provider:
//!
//! ## Project
//!
//! A unit of data access control identified by the `auth_id` of the
//! authorization data source. Users and groups are granted privileges on
//! projects.
//!
//! ## Cloud provider
//!
//! A storage system (for example a Ceph or AWS S3 installation). Projects get
//! storage access to cloud providers.
//!
//! ## Bucket
//!
//! A storage bucket on a cloud provider owned by a project.
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
use crate::plugin_manager::PluginManager;
use crate::resource::backend::{ResourceBackend, sql::SqlBackend};
use crate::resource::error::ResourceProviderError;
use crate::resource::types::*;

#[cfg(test)]
pub use mock::MockResourceProvider;
pub use types::ResourceApi;

#[derive(Clone)]
pub struct ResourceProvider {
    backend_driver: Arc<dyn ResourceBackend>,
}

impl ResourceProvider {
    pub fn new(
        config: &Config,
        plugin_manager: &PluginManager,
    ) -> Result<Self, ResourceProviderError> {
        let backend_driver = if let Some(driver) =
            plugin_manager.get_resource_backend(config.resource.driver.clone())
        {
            driver.clone()
        } else {
            match config.resource.driver.as_str() {
                "sql" => Arc::new(SqlBackend::default()),
                _ => {
                    return Err(ResourceProviderError::UnsupportedDriver(
                        config.resource.driver.clone(),
                    ));
                }
            }
        };
        Ok(Self { backend_driver })
    }
}

#[async_trait]
impl ResourceApi for ResourceProvider {
    /// List projects
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn list_projects(
        &self,
        state: &ServiceState,
    ) -> Result<Vec<ProjectInfo>, ResourceProviderError> {
        self.backend_driver.list_projects(state).await
    }

    /// Get single project
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn get_project<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<Option<Project>, ResourceProviderError> {
        self.backend_driver.get_project(state, name).await
    }

    /// Get single project by the auth_id
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn get_project_by_auth_id<'a>(
        &self,
        state: &ServiceState,
        auth_id: &'a str,
    ) -> Result<Option<Project>, ResourceProviderError> {
        self.backend_driver.get_project_by_auth_id(state, auth_id).await
    }

    /// Get project with the bucket names
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn get_project_info<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<Option<ProjectInfo>, ResourceProviderError> {
        self.backend_driver.get_project_info(state, name).await
    }

    /// Create project
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn create_project(
        &self,
        state: &ServiceState,
        project: ProjectCreate,
    ) -> Result<Project, ResourceProviderError> {
        project.validate()?;
        self.backend_driver.create_project(state, project).await
    }

    /// Delete project
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn delete_project<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<Vec<String>, ResourceProviderError> {
        self.backend_driver.delete_project(state, name).await
    }

    /// Create cloud provider
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn create_cloud_provider(
        &self,
        state: &ServiceState,
        provider: CloudProviderCreate,
    ) -> Result<CloudProvider, ResourceProviderError> {
        provider.validate()?;
        self.backend_driver.create_cloud_provider(state, provider).await
    }

    /// Get cloud provider
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn get_cloud_provider<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<Option<CloudProvider>, ResourceProviderError> {
        self.backend_driver.get_cloud_provider(state, name).await
    }

    /// Delete cloud provider
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn delete_cloud_provider<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<(), ResourceProviderError> {
        self.backend_driver.delete_cloud_provider(state, name).await
    }

    #[tracing::instrument(level = "info", skip(self, state))]
    async fn list_project_cloud_providers<'a>(
        &self,
        state: &ServiceState,
        project_name: &'a str,
    ) -> Result<Vec<CloudProvider>, ResourceProviderError> {
        self.backend_driver.list_project_cloud_providers(state, project_name).await
    }

    #[tracing::instrument(level = "info", skip(self, state))]
    async fn list_project_buckets<'a>(
        &self,
        state: &ServiceState,
        project_name: &'a str,
    ) -> Result<Vec<BucketInfo>, ResourceProviderError> {
        self.backend_driver.list_project_buckets(state, project_name).await
    }

    #[tracing::instrument(level = "info", skip(self, state))]
    async fn create_bucket_on_project<'a>(
        &self,
        state: &ServiceState,
        project_name: &'a str,
        bucket: BucketCreate,
    ) -> Result<Bucket, ResourceProviderError> {
        bucket.validate()?;
        self.backend_driver.create_bucket_on_project(state, project_name, bucket).await
    }

    #[tracing::instrument(level = "info", skip(self, state))]
    async fn delete_bucket_on_project<'a>(
        &self,
        state: &ServiceState,
        project_name: &'a str,
        bucket_name: &'a str,
    ) -> Result<(), ResourceProviderError> {
        self.backend_driver.delete_bucket_on_project(state, project_name, bucket_name).await
    }
}
