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

/// Remove the user access privileges on the project.
pub async fn revoke<U: AsRef<str>, P: AsRef<str>>(
    db: &DatabaseConnection,
    username: U,
    project_name: P,
) -> Result<(), AssignmentDatabaseError> {
    let user = lookup::user(db, username.as_ref()).await?;
    let project = lookup::project(db, project_name.as_ref()).await?;
    let res = DbAccessPrivilege::delete_many()
        .filter(db_access_privilege::Column::UserId.eq(user.id))
        .filter(db_access_privilege::Column::ProjectId.eq(project.id))
        .exec(db)
        .await
        .context("deleting user access privilege")?;
    if res.rows_affected == 0 {
        return Err(AssignmentDatabaseError::UserProjectNotLinked {
            project: project.name,
            user: user.username,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Transaction};

    use super::super::super::access_privilege::tests::*;
    use super::*;
    use crate::db::entity::user as db_user;

    #[tokio::test]
    async fn test_revoke() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![get_user_mock(1, "alice")]])
            .append_query_results([vec![get_project_mock(2, "p2")]])
            .append_exec_results([MockExecResult {
                rows_affected: 1,
                ..Default::default()
            }])
            .into_connection();

        revoke(&db, "alice", "p2").await.unwrap();
        assert_eq!(
            db.into_transaction_log()[2],
            Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"DELETE FROM "access_privilege" WHERE "access_privilege"."user_id" = $1 AND "access_privilege"."project_id" = $2"#,
                [1i32.into(), 2i32.into()]
            )
        );
    }

    #[tokio::test]
    async fn test_revoke_not_linked() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![get_user_mock(1, "alice")]])
            .append_query_results([vec![get_project_mock(2, "p2")]])
            .append_exec_results([MockExecResult {
                rows_affected: 0,
                ..Default::default()
            }])
            .into_connection();

        match revoke(&db, "alice", "p2").await {
            Err(AssignmentDatabaseError::UserProjectNotLinked { project, user }) => {
                assert_eq!("p2", project);
                assert_eq!("alice", user);
            }
            other => panic!("not linked expected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_revoke_unknown_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<db_user::Model>::new()])
            .into_connection();

        assert!(matches!(
            revoke(&db, "ghost", "p2").await,
            Err(AssignmentDatabaseError::UserNotFound(_))
        ));
    }
}
