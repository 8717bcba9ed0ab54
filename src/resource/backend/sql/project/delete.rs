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
use tracing::info;

use super::get::get_model_by_name;
use crate::db::entity::{
    access_privilege as db_access_privilege,
    prelude::{
        AccessPrivilege as DbAccessPrivilege, Project as DbProject,
        ProjectToBucket as DbProjectToBucket, StorageAccess as DbStorageAccess, User as DbUser,
        UserToGroup as DbUserToGroup,
    },
    project_to_bucket as db_project_to_bucket, storage_access as db_storage_access,
    user as db_user, user_to_group as db_user_to_group,
};
use crate::error::DbContextExt;
use crate::resource::backend::error::ResourceDatabaseError;

/// Delete the project which has no buckets left.
///
/// Users whose only access privilege is on this project are deleted together
/// with the project. Their names are returned.
pub async fn delete<N: AsRef<str>>(
    db: &DatabaseConnection,
    name: N,
) -> Result<Vec<String>, ResourceDatabaseError> {
    let project = get_model_by_name(db, name.as_ref())
        .await?
        .ok_or_else(|| ResourceDatabaseError::ProjectNotFound(name.as_ref().to_string()))?;

    if DbProjectToBucket::find()
        .filter(db_project_to_bucket::Column::ProjectId.eq(project.id))
        .one(db)
        .await
        .context("checking project buckets")?
        .is_some()
    {
        return Err(ResourceDatabaseError::ProjectHasBuckets(project.name));
    }

    let accesses: Vec<db_access_privilege::Model> = DbAccessPrivilege::find()
        .filter(db_access_privilege::Column::ProjectId.eq(project.id))
        .all(db)
        .await
        .context("fetching project access privileges")?;

    let mut orphaned_users: Vec<i32> = Vec::new();
    for user_id in accesses.iter().filter_map(|x| x.user_id) {
        let user_accesses = DbAccessPrivilege::find()
            .filter(db_access_privilege::Column::UserId.eq(user_id))
            .all(db)
            .await
            .context("fetching user access privileges")?;
        if user_accesses.len() == 1 {
            orphaned_users.push(user_id);
        }
    }

    let txn = db.begin().await.context("starting transaction")?;
    DbAccessPrivilege::delete_many()
        .filter(db_access_privilege::Column::ProjectId.eq(project.id))
        .exec(&txn)
        .await
        .context("deleting project access privileges")?;

    let mut removed_users: Vec<String> = Vec::new();
    if !orphaned_users.is_empty() {
        let users: Vec<db_user::Model> = DbUser::find()
            .filter(db_user::Column::Id.is_in(orphaned_users.clone()))
            .order_by_asc(db_user::Column::Username)
            .all(&txn)
            .await
            .context("fetching users without project access")?;
        for user in users {
            info!(
                "removing user {} without remaining project access",
                user.username
            );
            removed_users.push(user.username);
        }
        DbUserToGroup::delete_many()
            .filter(db_user_to_group::Column::UserId.is_in(orphaned_users.clone()))
            .exec(&txn)
            .await
            .context("deleting group memberships of removed users")?;
        DbUser::delete_many()
            .filter(db_user::Column::Id.is_in(orphaned_users))
            .exec(&txn)
            .await
            .context("deleting users without project access")?;
    }

    DbStorageAccess::delete_many()
        .filter(db_storage_access::Column::ProjectId.eq(project.id))
        .exec(&txn)
        .await
        .context("deleting project storage access")?;
    DbProject::delete_by_id(project.id)
        .exec(&txn)
        .await
        .context("deleting project")?;
    txn.commit().await.context("committing project deletion")?;

    Ok(removed_users)
}
