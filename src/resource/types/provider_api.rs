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
use crate::resource::ResourceProviderError;
use crate::resource::types::bucket::*;
use crate::resource::types::cloud_provider::*;
use crate::resource::types::project::*;

/// Resource API.
#[async_trait]
pub trait ResourceApi: Send + Sync {
    /// List all projects with their bucket names.
    async fn list_projects(
        &self,
        state: &ServiceState,
    ) -> Result<Vec<ProjectInfo>, ResourceProviderError>;

    /// Get a project by the `name`.
    async fn get_project<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<Option<Project>, ResourceProviderError>;

    /// Get a project by the `auth_id`.
    async fn get_project_by_auth_id<'a>(
        &self,
        state: &ServiceState,
        auth_id: &'a str,
    ) -> Result<Option<Project>, ResourceProviderError>;

    /// Get a project with the associated bucket names.
    async fn get_project_info<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<Option<ProjectInfo>, ResourceProviderError>;

    /// Create a project together with its storage accesses and buckets.
    async fn create_project(
        &self,
        state: &ServiceState,
        project: ProjectCreate,
    ) -> Result<Project, ResourceProviderError>;

    /// Delete a project without buckets. Returns names of the users deleted
    /// because this project was their only access.
    async fn delete_project<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<Vec<String>, ResourceProviderError>;

    /// Register a new cloud provider.
    async fn create_cloud_provider(
        &self,
        state: &ServiceState,
        provider: CloudProviderCreate,
    ) -> Result<CloudProvider, ResourceProviderError>;

    /// Get a cloud provider by the `name`.
    async fn get_cloud_provider<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<Option<CloudProvider>, ResourceProviderError>;

    /// Delete a cloud provider not used by any project.
    async fn delete_cloud_provider<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<(), ResourceProviderError>;

    /// List cloud providers the project has storage access to.
    async fn list_project_cloud_providers<'a>(
        &self,
        state: &ServiceState,
        project_name: &'a str,
    ) -> Result<Vec<CloudProvider>, ResourceProviderError>;

    /// List buckets of the project.
    async fn list_project_buckets<'a>(
        &self,
        state: &ServiceState,
        project_name: &'a str,
    ) -> Result<Vec<BucketInfo>, ResourceProviderError>;

    /// Create a bucket owned by the project.
    async fn create_bucket_on_project<'a>(
        &self,
        state: &ServiceState,
        project_name: &'a str,
        bucket: BucketCreate,
    ) -> Result<Bucket, ResourceProviderError>;

    /// Delete a bucket of the project.
    async fn delete_bucket_on_project<'a>(
        &self,
        state: &ServiceState,
        project_name: &'a str,
        bucket_name: &'a str,
    ) -> Result<(), ResourceProviderError>;
}
