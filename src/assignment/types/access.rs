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
//! Access privilege types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::BuilderError;

/// Privileges of a user or a group on the project.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct AccessPrivilege {
    pub id: i32,
    #[builder(default)]
    pub user_id: Option<i32>,
    #[builder(default)]
    pub group_id: Option<i32>,
    pub project_id: i32,
    /// Privileges (e.g. `read`, `write`).
    #[builder(default)]
    pub privilege: Vec<String>,
}

/// Grant of privileges to the user on the project identified by the `auth_id`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct UserProjectGrant {
    #[validate(length(min = 1, max = 255))]
    pub auth_id: String,
    #[serde(default)]
    pub privilege: Vec<String>,
}

/// Project the user has access to.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ProjectAccess {
    /// Project name.
    pub project: String,
    pub auth_id: String,
    pub privilege: Vec<String>,
}
