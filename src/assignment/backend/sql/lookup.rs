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
//! Resolution of the assignment actors by their names.

use sea_orm::entity::*;
use sea_orm::query::*;
use sea_orm::DatabaseConnection;

use crate::assignment::backend::error::AssignmentDatabaseError;
use crate::db::entity::{
    group as db_group,
    prelude::{Group as DbGroup, Project as DbProject, User as DbUser},
    project as db_project, user as db_user,
};
use crate::error::DbContextExt;

pub(super) async fn user(
    db: &DatabaseConnection,
    username: &str,
) -> Result<db_user::Model, AssignmentDatabaseError> {
    DbUser::find()
        .filter(db_user::Column::Username.eq(username))
        .one(db)
        .await
        .context("fetching user by name")?
        .ok_or_else(|| AssignmentDatabaseError::UserNotFound(username.to_string()))
}

pub(super) async fn group(
    db: &DatabaseConnection,
    name: &str,
) -> Result<db_group::Model, AssignmentDatabaseError> {
    DbGroup::find()
        .filter(db_group::Column::Name.eq(name))
        .one(db)
        .await
        .context("fetching group by name")?
        .ok_or_else(|| AssignmentDatabaseError::GroupNotFound(name.to_string()))
}

pub(super) async fn project(
    db: &DatabaseConnection,
    name: &str,
) -> Result<db_project::Model, AssignmentDatabaseError> {
    DbProject::find()
        .filter(db_project::Column::Name.eq(name))
        .one(db)
        .await
        .context("fetching project by name")?
        .ok_or_else(|| AssignmentDatabaseError::ProjectNotFound(name.to_string()))
}

pub(super) async fn project_by_auth_id(
    db: &DatabaseConnection,
    auth_id: &str,
) -> Result<db_project::Model, AssignmentDatabaseError> {
    DbProject::find()
        .filter(db_project::Column::AuthId.eq(auth_id))
        .one(db)
        .await
        .context("fetching project by auth_id")?
        .ok_or_else(|| AssignmentDatabaseError::ProjectNotFound(auth_id.to_string()))
}
