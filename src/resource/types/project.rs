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

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::BuilderError;

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct Project {
    /// The ID of the project.
    pub id: i32,
    /// The project name.
    pub name: String,
    /// The identifier used by the authorization data source.
    pub auth_id: String,
    /// The description of the project.
    #[builder(default)]
    pub description: Option<String>,
}

/// Project with the names of the associated buckets.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ProjectInfo {
    pub id: i32,
    pub name: String,
    pub auth_id: String,
    pub description: Option<String>,
    pub buckets: Vec<String>,
}

impl ProjectInfo {
    pub fn new(project: Project, buckets: Vec<String>) -> Self {
        Self {
            id: project.id,
            name: project.name,
            auth_id: project.auth_id,
            description: project.description,
            buckets,
        }
    }
}

/// Storage access of the new project with the buckets to create on it.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct StorageAccessCreate {
    /// Cloud provider name.
    #[validate(length(min = 1, max = 255))]
    pub provider: String,
    /// Buckets created on the provider and owned by the project.
    #[serde(default)]
    pub buckets: Vec<String>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct ProjectCreate {
    /// The project name. Defaults to the `auth_id`.
    #[builder(default)]
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    /// The identifier used by the authorization data source.
    #[validate(length(min = 1, max = 255))]
    pub auth_id: String,
    /// The description of the project.
    #[builder(default)]
    pub description: Option<String>,
    /// Storage accesses.
    #[builder(default)]
    #[validate(nested)]
    pub storage_accesses: Vec<StorageAccessCreate>,
}

impl ProjectCreate {
    /// Effective name of the project.
    pub fn project_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.auth_id)
    }
}
