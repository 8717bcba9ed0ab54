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
use crate::resource::types::*;

pub mod error;
pub mod sql;

/// Resource backend driver.
#[async_trait]
pub trait ResourceBackend: Send + Sync {
    /// List projects.
    async fn list_projects(
        &self,
        state: &ServiceState,
    ) -> Result<Vec<ProjectInfo>, ResourceProviderError>;

    /// Get single project by the name.
    async fn get_project<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<Option<Project>, ResourceProviderError>;

    /// Get single project by the auth_id.
    async fn get_project_by_auth_id<'a>(
        &self,
        state: &ServiceState,
        auth_id: &'a str,
    ) -> Result<Option<Project>, ResourceProviderError>;

    /// Get project info.
    async fn get_project_info<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<Option<ProjectInfo>, ResourceProviderError>;

    /// Create project.
    async fn create_project(
        &self,
        state: &ServiceState,
        project: ProjectCreate,
    ) -> Result<Project, ResourceProviderError>;

    /// Delete project.
    async fn delete_project<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<Vec<String>, ResourceProviderError>;

    /// Create cloud provider.
    async fn create_cloud_provider(
        &self,
        state: &ServiceState,
        provider: CloudProviderCreate,
    ) -> Result<CloudProvider, ResourceProviderError>;

    /// Get cloud provider by the name.
    async fn get_cloud_provider<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<Option<CloudProvider>, ResourceProviderError>;

    /// Delete cloud provider.
    async fn delete_cloud_provider<'a>(
        &self,
        state: &ServiceState,
        name: &'a str,
    ) -> Result<(), ResourceProviderError>;

    /// List cloud providers of the project.
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

    /// Create bucket on the project.
    async fn create_bucket_on_project<'a>(
        &self,
        state: &ServiceState,
        project_name: &'a str,
        bucket: BucketCreate,
    ) -> Result<Bucket, ResourceProviderError>;

    /// Delete bucket of the project.
    async fn delete_bucket_on_project<'a>(
        &self,
        state: &ServiceState,
        project_name: &'a str,
        bucket_name: &'a str,
    ) -> Result<(), ResourceProviderError>;
}
