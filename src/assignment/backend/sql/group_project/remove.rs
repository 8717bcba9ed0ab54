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
use crate::db::entity::{
    access_privilege as db_access_privilege, prelude::AccessPrivilege as DbAccessPrivilege,
};
use crate::error::DbContextExt;

/// Disconnect the group from the project.
pub async fn remove<G: AsRef<str>, P: AsRef<str>>(
    db: &DatabaseConnection,
    group_name: G,
    project_name: P,
) -> Result<(), AssignmentDatabaseError> {
    let group = lookup::group(db, group_name.as_ref()).await?;
    let project = lookup::project(db, project_name.as_ref()).await?;
    let res = DbAccessPrivilege::delete_many()
        .filter(db_access_privilege::Column::GroupId.eq(group.id))
        .filter(db_access_privilege::Column::ProjectId.eq(project.id))
        .exec(db)
        .await
        .context("disconnecting group from the project")?;
    if res.rows_affected == 0 {
        return Err(AssignmentDatabaseError::GroupProjectNotLinked {
            project: project.name,
            group: group.name,
        });
    }
    Ok(())
}
