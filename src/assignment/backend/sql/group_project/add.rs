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

use sea_orm::DatabaseConnection;
use sea_orm::entity::*;
use sea_orm::query::*;

use super::super::lookup;
use crate::assignment::backend::error::AssignmentDatabaseError;
use crate::assignment::types::*;
use crate::db::entity::{
    access_privilege as db_access_privilege, prelude::AccessPrivilege as DbAccessPrivilege,
};
use crate::error::DbContextExt;

/// Connect the group to the project. Connecting an already linked pair
/// replaces the privileges.
pub async fn add<G: AsRef<str>, P: AsRef<str>>(
    db: &DatabaseConnection,
    group_name: G,
    project_name: P,
    privilege: Vec<String>,
) -> Result<AccessPrivilege, AssignmentDatabaseError> {
    let group = lookup::group(db, group_name.as_ref()).await?;
    let project = lookup::project(db, project_name.as_ref()).await?;
    let privilege = serde_json::to_value(&privilege)?;

    let existing = DbAccessPrivilege::find()
        .filter(db_access_privilege::Column::GroupId.eq(group.id))
        .filter(db_access_privilege::Column::ProjectId.eq(project.id))
        .one(db)
        .await
        .context("fetching group access privilege")?;

    let model = match existing {
        Some(existing) => {
            let mut entry: db_access_privilege::ActiveModel = existing.into();
            entry.privilege = Set(Some(privilege));
            entry
                .update(db)
                .await
                .context("updating group access privilege")?
        }
        None => db_access_privilege::ActiveModel {
            id: NotSet,
            user_id: NotSet,
            group_id: Set(Some(group.id)),
            project_id: Set(project.id),
            privilege: Set(Some(privilege)),
        }
        .insert(db)
        .await
        .context("connecting group to the project")?,
    };
    model.try_into()
}
