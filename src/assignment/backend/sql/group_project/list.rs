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
    access_privilege as db_access_privilege, prelude::Project as DbProject, project as db_project,
};
use crate::error::DbContextExt;

/// List names of the projects connected to the group.
pub async fn list<G: AsRef<str>>(
    db: &DatabaseConnection,
    group_name: G,
) -> Result<Vec<String>, AssignmentDatabaseError> {
    let group = lookup::group(db, group_name.as_ref()).await?;
    Ok(DbProject::find()
        .join(
            JoinType::InnerJoin,
            db_project::Relation::AccessPrivilege.def(),
        )
        .filter(db_access_privilege::Column::GroupId.eq(group.id))
        .order_by_asc(db_project::Column::Name)
        .all(db)
        .await
        .context("listing projects of the group")?
        .into_iter()
        .map(|x| x.name)
        .collect())
}
