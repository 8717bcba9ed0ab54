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

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, Serialize, PartialEq)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct Group {
    /// The ID of the group.
    pub id: i32,
    /// The group name. Unique across the installation.
    pub name: String,
    /// The description of the group.
    #[builder(default)]
    pub description: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct GroupCreate {
    /// The group name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// The description of the group.
    #[builder(default)]
    pub description: Option<String>,
}

/// Mutable properties of the group.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct GroupUpdate {
    /// The new description. `None` clears it.
    #[validate(length(max = 255))]
    pub description: Option<String>,
}
