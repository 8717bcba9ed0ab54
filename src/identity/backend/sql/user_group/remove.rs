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

use crate::db::entity::{prelude::UserToGroup as DbUserToGroup, user_to_group as db_user_to_group};
use crate::error::DbContextExt;
use crate::identity::backend::error::IdentityDatabaseError;

/// Remove the user from the group.
pub async fn remove<U: AsRef<str>, G: AsRef<str>>(
    db: &DatabaseConnection,
    username: U,
    group_name: G,
) -> Result<(), IdentityDatabaseError> {
    let (user, group) = super::resolve(db, username.as_ref(), group_name.as_ref()).await?;
    let res = DbUserToGroup::delete_many()
        .filter(db_user_to_group::Column::UserId.eq(user.id))
        .filter(db_user_to_group::Column::GroupId.eq(group.id))
        .exec(db)
        .await
        .context("removing user from the group")?;
    if res.rows_affected == 0 {
        return Err(IdentityDatabaseError::MembershipNotFound {
            user: user.username,
            group: group.name,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Transaction};

    use super::super::super::{group::tests::get_group_mock, user::tests::get_user_mock};
    use super::*;

    #[tokio::test]
    async fn test_remove() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![get_user_mock(1, "alice")]])
            .append_query_results([vec![get_group_mock(2, "admins")]])
            .append_exec_results([MockExecResult {
                rows_affected: 1,
                ..Default::default()
            }])
            .into_connection();

        remove(&db, "alice", "admins").await.unwrap();
        let log = db.into_transaction_log();
        assert_eq!(
            log[2],
            Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"DELETE FROM "user_to_group" WHERE "user_to_group"."user_id" = $1 AND "user_to_group"."group_id" = $2"#,
                [1i32.into(), 2i32.into()]
            )
        );
    }

    #[tokio::test]
    async fn test_remove_not_linked() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![get_user_mock(1, "alice")]])
            .append_query_results([vec![get_group_mock(2, "admins")]])
            .append_exec_results([MockExecResult {
                rows_affected: 0,
                ..Default::default()
            }])
            .into_connection();

        match remove(&db, "alice", "admins").await {
            Err(IdentityDatabaseError::MembershipNotFound { user, group }) => {
                assert_eq!("alice", user);
                assert_eq!("admins", group);
            }
            other => panic!("membership not found expected, got {other:?}"),
        }
    }
}
