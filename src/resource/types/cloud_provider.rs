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

/// Storage system (cloud provider) hosting the buckets.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct CloudProvider {
    pub id: i32,
    pub name: String,
    #[builder(default)]
    pub endpoint: Option<String>,
    /// Storage backend type (e.g. `cleversafe`, `aws`).
    #[builder(default)]
    pub backend: Option<String>,
    /// Service kind (e.g. `storage`).
    #[builder(default)]
    pub service: Option<String>,
    #[builder(default)]
    pub description: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct CloudProviderCreate {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[builder(default)]
    #[validate(url)]
    pub endpoint: Option<String>,
    #[builder(default)]
    pub backend: Option<String>,
    #[builder(default)]
    pub service: Option<String>,
    #[builder(default)]
    pub description: Option<String>,
}
