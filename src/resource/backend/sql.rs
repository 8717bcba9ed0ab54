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

mod bucket;
mod cloud_provider;
mod project;

use super::ResourceBackend;
use crate::fence::ServiceState;
use crate::resource::ResourceProviderError;
use crate::resource::types::*;

#[derive(Clone, Debug, Default)]
pub struct SqlBackend {}

#[async_trait]
impl ResourceBackend for SqlBackend {
    /// List projects
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn list_projects(
        &self,
        state: &ServiceState,
    ) -> Result<Vec<ProjectInfo>, ResourceProviderError> {
        Ok(project::list(&state.db).await?)
    }

    /// Get single project by name
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn get_project<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<Option<Project>, ResourceProviderError> {
        Ok(project::get_by_name(&state.db, name).await?)
    }

    /// Get single project by auth_id
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn get_project_by_auth_id<'a>(
        &self,
        state: &ServiceState,
        auth_id: &'a str,
    ) -> Result<Option<Project>, ResourceProviderError> {
        Ok(project::get_by_auth_id(&state.db, auth_id).await?)
    }

    /// Get project info
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn get_project_info<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<Option<ProjectInfo>, ResourceProviderError> {
        Ok(project::get_info(&state.db, name).await?)
    }

    /// Create project
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn create_project(
        &self,
        state: &ServiceState,
        project: ProjectCreate,
    ) -> Result<Project, ResourceProviderError> {
        Ok(project::create(&state.db, project).await?)
    }

    /// Delete project
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn delete_project<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<Vec<String>, ResourceProviderError> {
        Ok(project::delete(&state.db, name).await?)
    }

    /// Create cloud provider
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn create_cloud_provider(
        &self,
        state: &ServiceState,
        provider: CloudProviderCreate,
    ) -> Result<CloudProvider, ResourceProviderError> {
        Ok(cloud_provider::create(&state.db, provider).await?)
    }

    /// Get cloud provider
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn get_cloud_provider<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<Option<CloudProvider>, ResourceProviderError> {
        Ok(cloud_provider::get_by_name(&state.db, name).await?)
    }

    /// Delete cloud provider
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn delete_cloud_provider<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<(), ResourceProviderError> {
        Ok(cloud_provider::delete(&state.db, name).await?)
    }

    /// List cloud providers of the project
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn list_project_cloud_providers<'a>(
        &self,
        state: &ServiceState,
        project_name: &'a str,
    ) -> Result<Vec<CloudProvider>, ResourceProviderError> {
        Ok(cloud_provider::list_for_project(&state.db, project_name).await?)
    }

    /// List buckets of the project
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn list_project_buckets<'a>(
        &self,
        state: &ServiceState,
        project_name: &'a str,
    ) -> Result<Vec<BucketInfo>, ResourceProviderError> {
        Ok(bucket::list_for_project(&state.db, project_name).await?)
    }

    /// Create bucket on the project
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn create_bucket_on_project<'a>(
        &self,
        state: &ServiceState,
        project_name: &'a str,
        bucket: BucketCreate,
    ) -> Result<Bucket, ResourceProviderError> {
        Ok(bucket::create_on_project(&state.db, project_name, bucket).await?)
    }

    /// Delete bucket of the project
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn delete_bucket_on_project<'a>(
        &self,
        state: &ServiceState,
        project_name: &'a str,
        bucket_name: &'a str,
    ) -> Result<(), ResourceProviderError> {
        Ok(bucket::delete_on_project(&state.db, project_name, bucket_name).await?)
    }
}
