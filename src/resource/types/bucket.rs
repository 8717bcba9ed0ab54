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
#[builder(setter(into))]
pub struct Bucket {
    pub id: i32,
    pub name: String,
    /// The ID of the cloud provider hosting the bucket.
    pub provider_id: i32,
}

/// Bucket of a project together with the name of its cloud provider.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct BucketInfo {
    pub name: String,
    pub provider: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct BucketCreate {
    /// Bucket name. Unique per cloud provider.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Cloud provider name.
    #[validate(length(min = 1, max = 255))]
    pub provider: String,
}
