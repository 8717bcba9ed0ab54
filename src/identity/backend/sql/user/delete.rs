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
    prelude::{AccessPrivilege as DbAccessPrivilege, User as DbUser, UserToGroup as DbUserToGroup},
    user_to_group as db_user_to_group,
};
use crate::error::DbContextExt;
use crate::identity::backend::error::IdentityDatabaseError;

/// Delete the user with all the group memberships and access privileges.
pub async fn delete<U: AsRef<str>>(
    db: &DatabaseConnection,
    username: U,
) -> Result<(), IdentityDatabaseError> {
    let user = get_model_by_name(db, username.as_ref())
        .await?
        .ok_or_else(|| IdentityDatabaseError::UserNotFound(username.as_ref().to_string()))?;

    let txn = db.begin().await.context("starting transaction")?;
    DbUserToGroup::delete_many()
        .filter(db_user_to_group::Column::UserId.eq(user.id))
        .exec(&txn)
        .await
        .context("deleting user group memberships")?;
    DbAccessPrivilege::delete_many()
        .filter(db_access_privilege::Column::UserId.eq(user.id))
        .exec(&txn)
        .await
        .context("deleting user access privileges")?;
    DbUser::delete_by_id(user.id)
        .exec(&txn)
        .await
        .context("deleting user")?;
    txn.commit().await.context("committing user deletion")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Statement, Transaction};

    use super::super::tests::get_user_mock;
    use super::*;
    use crate::db::entity::user as db_user;

    #[tokio::test]
    async fn test_delete() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![get_user_mock(7, "alice")]])
            .append_exec_results([
                MockExecResult {
                    rows_affected: 2,
                    ..Default::default()
                },
                MockExecResult {
                    rows_affected: 1,
                    ..Default::default()
                },
                MockExecResult {
                    rows_affected: 1,
                    ..Default::default()
                },
            ])
            .into_connection();

        delete(&db, "alice").await.unwrap();

        assert_eq!(
            db.into_transaction_log(),
            [
                Transaction::from_sql_and_values(
                    DatabaseBackend::Postgres,
                    r#"SELECT "user"."id", "user"."username", "user"."email", "user"."is_admin", "user"."identity_provider", "user"."active" FROM "user" WHERE "user"."username" = $1 LIMIT $2"#,
                    ["alice".into(), 1u64.into()]
                ),
                Transaction::many(vec![
                    Statement::from_string(DatabaseBackend::Postgres, r#"BEGIN"#),
                    Statement::from_sql_and_values(
                        DatabaseBackend::Postgres,
                        r#"DELETE FROM "user_to_group" WHERE "user_to_group"."user_id" = $1"#,
                        [7i32.into()]
                    ),
                    Statement::from_sql_and_values(
                        DatabaseBackend::Postgres,
                        r#"DELETE FROM "access_privilege" WHERE "access_privilege"."user_id" = $1"#,
                        [7i32.into()]
                    ),
                    Statement::from_sql_and_values(
                        DatabaseBackend::Postgres,
                        r#"DELETE FROM "user" WHERE "user"."id" = $1"#,
                        [7i32.into()]
                    ),
                    Statement::from_string(DatabaseBackend::Postgres, r#"COMMIT"#),
                ]),
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<db_user::Model>::new()])
            .into_connection();

        match delete(&db, "ghost").await {
            Err(IdentityDatabaseError::UserNotFound(name)) => assert_eq!("ghost", name),
            other => panic!("not found expected, got {other:?}"),
        }
    }
}
