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
pub use get::{get_by_auth_id, get_by_name, get_info, get_model_by_name};
pub use list::list;

use crate::db::entity::project as db_project;
use crate::resource::backend::error::ResourceDatabaseError;
use crate::resource::types::{Project, ProjectBuilder};

impl TryFrom<db_project::Model> for Project {
    type Error = ResourceDatabaseError;

    fn try_from(value: db_project::Model) -> Result<Self, Self::Error> {
        let mut project_builder = ProjectBuilder::default();
        project_builder.id(value.id);
        project_builder.name(value.name);
        project_builder.auth_id(value.auth_id);
        if let Some(description) = value.description {
            project_builder.description(description);
        }
        Ok(project_builder.build()?)
    }
}
