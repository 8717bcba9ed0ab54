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
mod list;

pub use create::create_on_project;
pub use delete::delete_on_project;
pub use list::list_for_project;

use crate::db::entity::bucket as db_bucket;
use crate::resource::backend::error::ResourceDatabaseError;
use crate::resource::types::{Bucket, BucketBuilder};

impl TryFrom<db_bucket::Model> for Bucket {
    type Error = ResourceDatabaseError;

    fn try_from(value: db_bucket::Model) -> Result<Self, Self::Error> {
        Ok(BucketBuilder::default()
            .id(value.id)
            .name(value.name)
            .provider_id(value.provider_id)
            .build()?)
    }
}
