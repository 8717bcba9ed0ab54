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

use super::super::{group, user};
use crate::db::entity::{
    group as db_group,
    prelude::{Group as DbGroup, User as DbUser, UserToGroup as DbUserToGroup},
    user as db_user, user_to_group as db_user_to_group,
};
use crate::error::DbContextExt;
use crate::identity::backend::error::IdentityDatabaseError;
use crate::identity::types::{Group, User};

/// List members of the group.
pub async fn list_group_users<G: AsRef<str>>(
    db: &DatabaseConnection,
    group_name: G,
) -> Result<Vec<User>, IdentityDatabaseError> {
    let group = group::get_model_by_name(db, group_name.as_ref())
        .await?
        .ok_or_else(|| IdentityDatabaseError::GroupNotFound(group_name.as_ref().to_string()))?;
    let entries: Vec<db_user::Model> = DbUser::find()
        .join(JoinType::InnerJoin, db_user::Relation::UserToGroup.def())
        .filter(db_user_to_group::Column::GroupId.eq(group.id))
        .order_by_asc(db_user::Column::Username)
        .all(db)
        .await
        .context("listing users of the group")?;
    entries.into_iter().map(TryInto::try_into).collect()
}

/// List groups of the user.
pub async fn list_user_groups<U: AsRef<str>>(
    db: &DatabaseConnection,
    username: U,
) -> Result<Vec<Group>, IdentityDatabaseError> {
    let user = user::get_model_by_name(db, username.as_ref())
        .await?
        .ok_or_else(|| IdentityDatabaseError::UserNotFound(username.as_ref().to_string()))?;
    let group_ids: Vec<i32> = DbUserToGroup::find()
        .filter(db_user_to_group::Column::UserId.eq(user.id))
        .all(db)
        .await
        .context("listing group memberships of the user")?
        .into_iter()
        .map(|x| x.group_id)
        .collect();
    if group_ids.is_empty() {
        return Ok(Vec::new());
    }
    let entries: Vec<db_group::Model> = DbGroup::find()
        .filter(db_group::Column::Id.is_in(group_ids))
        .order_by_asc(db_group::Column::Name)
        .all(db)
        .await
        .context("listing groups of the user")?;
    entries.into_iter().map(TryInto::try_into).collect()
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction};

    use super::super::super::{group::tests::get_group_mock, user::tests::get_user_mock};
    use super::*;

    #[tokio::test]
    async fn test_list_group_users() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![get_group_mock(2, "admins")]])
            .append_query_results([vec![get_user_mock(1, "alice")]])
            .into_connection();

        let users = list_group_users(&db, "admins").await.unwrap();
        assert_eq!("alice", users[0].username);

        let log = db.into_transaction_log();
        let sql = log[1].statements()[0].sql.clone();
        assert!(sql.contains(r#"INNER JOIN "user_to_group""#));
        assert!(sql.contains(r#"WHERE "user_to_group"."group_id" = $1"#));
        assert!(sql.ends_with(r#"ORDER BY "user"."username" ASC"#));
    }

    #[tokio::test]
    async fn test_list_user_groups() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![get_user_mock(1, "alice")]])
            .append_query_results([vec![
                db_user_to_group::Model {
                    user_id: 1,
                    group_id: 2,
                },
                db_user_to_group::Model {
                    user_id: 1,
                    group_id: 3,
                },
            ]])
            .append_query_results([vec![get_group_mock(2, "a"), get_group_mock(3, "b")]])
            .into_connection();

        let groups = list_user_groups(&db, "alice").await.unwrap();
        assert_eq!(
            vec!["a", "b"],
            groups.iter().map(|x| x.name.as_str()).collect::<Vec<_>>()
        );

        assert_eq!(
            db.into_transaction_log()[1..],
            [
                Transaction::from_sql_and_values(
                    DatabaseBackend::Postgres,
                    r#"SELECT "user_to_group"."user_id", "user_to_group"."group_id" FROM "user_to_group" WHERE "user_to_group"."user_id" = $1"#,
                    [1i32.into()]
                ),
                Transaction::from_sql_and_values(
                    DatabaseBackend::Postgres,
                    r#"SELECT "group"."id", "group"."name", "group"."description" FROM "group" WHERE "group"."id" IN ($1, $2) ORDER BY "group"."name" ASC"#,
                    [2i32.into(), 3i32.into()]
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_list_user_groups_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![get_user_mock(1, "alice")]])
            .append_query_results([Vec::<db_user_to_group::Model>::new()])
            .into_connection();

        assert!(list_user_groups(&db, "alice").await.unwrap().is_empty());
    }
}
