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
mod update;

pub use create::create;
pub use delete::delete;
pub use get::{get_by_name, get_model_by_name};
pub use list::list;
pub use update::update;

use crate::db::entity::group as db_group;
use crate::identity::backend::error::IdentityDatabaseError;
use crate::identity::types::{Group, GroupBuilder};

impl TryFrom<db_group::Model> for Group {
    type Error = IdentityDatabaseError;

    fn try_from(value: db_group::Model) -> Result<Self, Self::Error> {
        let mut builder = GroupBuilder::default();
        builder.id(value.id);
        builder.name(value.name);
        if let Some(description) = value.description {
            builder.description(description);
        }
        Ok(builder.build()?)
    }
}
