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

use super::get::get_model_by_name;
use crate::db::entity::{
    access_privilege as db_access_privilege,
    prelude::{
        AccessPrivilege as DbAccessPrivilege, Group as DbGroup, UserToGroup as DbUserToGroup,
    },
    user_to_group as db_user_to_group,
};
use crate::error::DbContextExt;
use crate::identity::backend::error::IdentityDatabaseError;

/// Delete the group after clearing its members and project privileges.
pub async fn delete<N: AsRef<str>>(
    db: &DatabaseConnection,
    name: N,
) -> Result<(), IdentityDatabaseError> {
    let group = get_model_by_name(db, name.as_ref())
        .await?
        .ok_or_else(|| IdentityDatabaseError::GroupNotFound(name.as_ref().to_string()))?;

    let txn = db.begin().await.context("starting transaction")?;
    DbUserToGroup::delete_many()
        .filter(db_user_to_group::Column::GroupId.eq(group.id))
        .exec(&txn)
        .await
        .context("clearing users of the group")?;
    DbAccessPrivilege::delete_many()
        .filter(db_access_privilege::Column::GroupId.eq(group.id))
        .exec(&txn)
        .await
        .context("clearing projects of the group")?;
    DbGroup::delete_by_id(group.id)
        .exec(&txn)
        .await
        .context("deleting group")?;
    txn.commit().await.context("committing group deletion")?;
    Ok(())
}
