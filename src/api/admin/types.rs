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
//! Administrative API types
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::assignment::types as assignment_types;
use crate::identity::types as identity_types;
use crate::resource::types as resource_types;

/// Project with the names of its buckets.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct Project {
    /// Project name.
    pub name: String,
    /// Identifier of the project in the authorization data source.
    pub auth_id: String,
    pub description: Option<String>,
    /// Names of the buckets owned by the project.
    pub buckets: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct ProjectList {
    pub projects: Vec<Project>,
}

/// Storage access of the new project.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct StorageAccess {
    /// Cloud provider name.
    pub provider: String,
    /// Buckets to create on the cloud provider.
    #[serde(default)]
    pub buckets: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct ProjectCreateRequest {
    /// Project name. Defaults to the `auth_id`.
    pub name: Option<String>,
    pub auth_id: String,
    pub description: Option<String>,
    #[serde(default)]
    pub storage_accesses: Vec<StorageAccess>,
}

/// Result of the project removal.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct ProjectDeleteResponse {
    /// Users deleted together with the project since it was their only access.
    pub deleted_users: Vec<String>,
}

/// Project names.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct ProjectNameList {
    pub projects: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct Bucket {
    pub name: String,
    /// Cloud provider hosting the bucket.
    pub provider: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct BucketList {
    pub buckets: Vec<Bucket>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct CloudProvider {
    pub name: String,
    pub endpoint: Option<String>,
    /// Storage backend type.
    pub backend: Option<String>,
    pub service: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct Group {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct GroupList {
    pub groups: Vec<Group>,
}

/// New properties of the group.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct GroupUpdateRequest {
    pub description: Option<String>,
}

/// Group names.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct GroupNameList {
    pub groups: Vec<String>,
}

/// Privileges of the group on the project.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct GroupProjectRequest {
    #[serde(default)]
    pub privilege: Vec<String>,
}

/// Privileges granted on the project.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct AccessPrivilege {
    pub privilege: Vec<String>,
}

/// Grant of privileges to the user on the project identified by the `auth_id`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct UserProjectGrantRequest {
    pub auth_id: String,
    #[serde(default)]
    pub privilege: Vec<String>,
}

/// Project the user has access to.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct ProjectAccess {
    pub project: String,
    pub auth_id: String,
    pub privilege: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct User {
    pub username: String,
    pub email: Option<String>,
    pub is_admin: bool,
    /// Identity provider the user logged in with.
    pub identity_provider: Option<String>,
    pub active: bool,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct UserList {
    pub users: Vec<User>,
}

/// User with the memberships and the project access.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct UserResponse {
    #[serde(flatten)]
    pub user: User,
    pub groups: Vec<String>,
    pub project_access: Vec<ProjectAccess>,
}

impl From<resource_types::ProjectInfo> for Project {
    fn from(value: resource_types::ProjectInfo) -> Self {
        Self {
            name: value.name,
            auth_id: value.auth_id,
            description: value.description,
            buckets: value.buckets,
        }
    }
}

impl From<ProjectCreateRequest> for resource_types::ProjectCreate {
    fn from(value: ProjectCreateRequest) -> Self {
        Self {
            name: value.name,
            auth_id: value.auth_id,
            description: value.description,
            storage_accesses: value
                .storage_accesses
                .into_iter()
                .map(|access| resource_types::StorageAccessCreate {
                    provider: access.provider,
                    buckets: access.buckets,
                })
                .collect(),
        }
    }
}

impl From<resource_types::BucketInfo> for Bucket {
    fn from(value: resource_types::BucketInfo) -> Self {
        Self {
            name: value.name,
            provider: value.provider,
        }
    }
}

impl From<Bucket> for resource_types::BucketCreate {
    fn from(value: Bucket) -> Self {
        Self {
            name: value.name,
            provider: value.provider,
        }
    }
}

impl From<resource_types::CloudProvider> for CloudProvider {
    fn from(value: resource_types::CloudProvider) -> Self {
        Self {
            name: value.name,
            endpoint: value.endpoint,
            backend: value.backend,
            service: value.service,
            description: value.description,
        }
    }
}

impl From<CloudProvider> for resource_types::CloudProviderCreate {
    fn from(value: CloudProvider) -> Self {
        Self {
            name: value.name,
            endpoint: value.endpoint,
            backend: value.backend,
            service: value.service,
            description: value.description,
        }
    }
}

impl From<identity_types::Group> for Group {
    fn from(value: identity_types::Group) -> Self {
        Self {
            name: value.name,
            description: value.description,
        }
    }
}

impl From<Group> for identity_types::GroupCreate {
    fn from(value: Group) -> Self {
        Self {
            name: value.name,
            description: value.description,
        }
    }
}

impl From<GroupUpdateRequest> for identity_types::GroupUpdate {
    fn from(value: GroupUpdateRequest) -> Self {
        Self {
            description: value.description,
        }
    }
}

impl From<identity_types::User> for User {
    fn from(value: identity_types::User) -> Self {
        Self {
            username: value.username,
            email: value.email,
            is_admin: value.is_admin,
            identity_provider: value.identity_provider,
            active: value.active,
        }
    }
}

impl From<assignment_types::ProjectAccess> for ProjectAccess {
    fn from(value: assignment_types::ProjectAccess) -> Self {
        Self {
            project: value.project,
            auth_id: value.auth_id,
            privilege: value.privilege,
        }
    }
}

impl From<UserProjectGrantRequest> for assignment_types::UserProjectGrant {
    fn from(value: UserProjectGrantRequest) -> Self {
        Self {
            auth_id: value.auth_id,
            privilege: value.privilege,
        }
    }
}

impl From<assignment_types::AccessPrivilege> for AccessPrivilege {
    fn from(value: assignment_types::AccessPrivilege) -> Self {
        Self {
            privilege: value.privilege,
        }
    }
}

macro_rules! json_response {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoResponse for $ty {
                fn into_response(self) -> Response {
                    (StatusCode::OK, Json(self)).into_response()
                }
            }
        )+
    };
}

json_response!(
    AccessPrivilege,
    BucketList,
    CloudProvider,
    Group,
    GroupList,
    GroupNameList,
    Project,
    ProjectDeleteResponse,
    ProjectList,
    ProjectNameList,
    UserList,
    UserResponse,
);
