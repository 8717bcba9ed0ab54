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

/// Grant the user privileges on the project. Privileges of an existing grant
/// are replaced.
pub async fn grant<U: AsRef<str>>(
    db: &DatabaseConnection,
    username: U,
    grant: UserProjectGrant,
) -> Result<AccessPrivilege, AssignmentDatabaseError> {
    let user = lookup::user(db, username.as_ref()).await?;
    let project = lookup::project_by_auth_id(db, &grant.auth_id).await?;
    let privilege = serde_json::to_value(&grant.privilege)?;

    let existing = DbAccessPrivilege::find()
        .filter(db_access_privilege::Column::UserId.eq(user.id))
        .filter(db_access_privilege::Column::ProjectId.eq(project.id))
        .one(db)
        .await
        .context("fetching user access privilege")?;

    let model = if let Some(existing) = existing {
        let mut entry: db_access_privilege::ActiveModel = existing.into();
        entry.privilege = Set(Some(privilege));
        entry
            .update(db)
            .await
            .context("updating user access privilege")?
    } else {
        db_access_privilege::ActiveModel {
            id: NotSet,
            user_id: Set(Some(user.id)),
            group_id: NotSet,
            project_id: Set(project.id),
            privilege: Set(Some(privilege)),
        }
        .insert(db)
        .await
        .context("inserting user access privilege")?
    };
    model.try_into()
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction};
    use serde_json::json;

    use super::super::super::access_privilege::tests::*;
    use super::*;
    use crate::db::entity::project as db_project;

    fn grant_request() -> UserProjectGrant {
        UserProjectGrant {
            auth_id: "phs000001".into(),
            privilege: vec!["read".into(), "write".into()],
        }
    }

    #[tokio::test]
    async fn test_grant_new() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![get_user_mock(1, "alice")]])
            .append_query_results([vec![get_project_mock(1, "p1")]])
            .append_query_results([Vec::<db_access_privilege::Model>::new()])
            .append_query_results([vec![get_user_privilege_mock(5, 1, 1)]])
            .into_connection();

        let res = grant(&db, "alice", grant_request()).await.unwrap();
        assert_eq!(5, res.id);
        assert_eq!(vec!["read", "write"], res.privilege);
        let log = db.into_transaction_log();
        assert_eq!(
            log[1],
            Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"SELECT "project"."id", "project"."name", "project"."auth_id", "project"."description" FROM "project" WHERE "project"."auth_id" = $1 LIMIT $2"#,
                ["phs000001".into(), 1u64.into()]
            )
        );
        assert_eq!(
            log[3],
            Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"INSERT INTO "access_privilege" ("user_id", "project_id", "privilege") VALUES ($1, $2, $3) RETURNING "id", "user_id", "group_id", "project_id", "privilege""#,
                [1i32.into(), 1i32.into(), json!(["read", "write"]).into()]
            )
        );
    }

    #[tokio::test]
    async fn test_grant_replaces_existing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![get_user_mock(1, "alice")]])
            .append_query_results([vec![get_project_mock(1, "p1")]])
            .append_query_results([vec![get_user_privilege_mock(5, 1, 1)]])
            .append_query_results([vec![get_user_privilege_mock(5, 1, 1)]])
            .into_connection();

        grant(&db, "alice", grant_request()).await.unwrap();
        let log = db.into_transaction_log();
        assert_eq!(4, log.len());
        assert!(
            log[3]
                .statements()
                .iter()
                .any(|x| x.sql.starts_with(r#"UPDATE "access_privilege" SET "privilege" = $1"#))
        );
    }

    #[tokio::test]
    async fn test_grant_unknown_project() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![get_user_mock(1, "alice")]])
            .append_query_results([Vec::<db_project::Model>::new()])
            .into_connection();

        match grant(&db, "alice", grant_request()).await {
            Err(AssignmentDatabaseError::ProjectNotFound(auth_id)) => {
                assert_eq!("phs000001", auth_id)
            }
            other => panic!("project not found expected, got {other:?}"),
        }
    }
}
