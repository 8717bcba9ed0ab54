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
use std::collections::HashMap;

use super::super::{access_privilege::privilege_from_json, lookup};
use crate::assignment::backend::error::AssignmentDatabaseError;
use crate::assignment::types::*;
use crate::db::entity::{
    access_privilege as db_access_privilege,
    prelude::{AccessPrivilege as DbAccessPrivilege, Project as DbProject},
    project as db_project,
};
use crate::error::DbContextExt;

/// List projects the user has direct privileges on.
pub async fn list<U: AsRef<str>>(
    db: &DatabaseConnection,
    username: U,
) -> Result<Vec<ProjectAccess>, AssignmentDatabaseError> {
    let user = lookup::user(db, username.as_ref()).await?;
    let privileges: Vec<db_access_privilege::Model> = DbAccessPrivilege::find()
        .filter(db_access_privilege::Column::UserId.eq(user.id))
        .all(db)
        .await
        .context("listing user access privileges")?;
    if privileges.is_empty() {
        return Ok(Vec::new());
    }

    let projects: HashMap<i32, db_project::Model> = DbProject::find()
        .filter(
            db_project::Column::Id.is_in(privileges.iter().map(|x| x.project_id)),
        )
        .order_by_asc(db_project::Column::Name)
        .all(db)
        .await
        .context("listing projects of the user")?
        .into_iter()
        .map(|x| (x.id, x))
        .collect();

    let mut res = Vec::with_capacity(privileges.len());
    for entry in privileges {
        if let Some(project) = projects.get(&entry.project_id) {
            res.push(ProjectAccess {
                project: project.name.clone(),
                auth_id: project.auth_id.clone(),
                privilege: privilege_from_json(entry.privilege)?,
            });
        }
    }
    res.sort_by(|a, b| a.project.cmp(&b.project));
    Ok(res)
}
