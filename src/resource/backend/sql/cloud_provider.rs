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

mod create;
mod delete;
mod get;
mod list;

pub use create::create;
pub use delete::delete;
pub use get::{get_by_name, get_model_by_name};
pub use list::list_for_project;

use crate::db::entity::cloud_provider as db_cloud_provider;
use crate::resource::backend::error::ResourceDatabaseError;
use crate::resource::types::{CloudProvider, CloudProviderBuilder};

impl TryFrom<db_cloud_provider::Model> for CloudProvider {
    type Error = ResourceDatabaseError;

    fn try_from(value: db_cloud_provider::Model) -> Result<Self, Self::Error> {
        let mut builder = CloudProviderBuilder::default();
        builder.id(value.id);
        builder.name(value.name);
        if let Some(val) = value.endpoint {
            builder.endpoint(val);
        }
        if let Some(val) = value.backend {
            builder.backend(val);
        }
        if let Some(val) = value.service {
            builder.service(val);
        }
        if let Some(val) = value.description {
            builder.description(val);
        }
        Ok(builder.build()?)
    }
}
