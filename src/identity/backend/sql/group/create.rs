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

use super::get::get_model_by_name;
use crate::db::entity::group as db_group;
use crate::error::DbContextExt;
use crate::identity::backend::error::IdentityDatabaseError;
use crate::identity::types::{Group, GroupCreate};

pub async fn create(
    db: &DatabaseConnection,
    group: GroupCreate,
) -> Result<Group, IdentityDatabaseError> {
    if get_model_by_name(db, &group.name).await?.is_some() {
        return Err(IdentityDatabaseError::GroupExists(group.name));
    }
    let entry = db_group::ActiveModel {
        id: NotSet,
        name: Set(group.name),
        description: Set(group.description),
    };
    let db_entry: db_group::Model = entry.insert(db).await.context("inserting new group")?;
    db_entry.try_into()
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction};

    use super::super::tests::get_group_mock;
    use super::*;

    #[tokio::test]
    async fn test_create() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<db_group::Model>::new()])
            .append_query_results([vec![get_group_mock(1, "admins")]])
            .into_connection();

        let req = GroupCreate {
            name: "admins".into(),
            description: Some("fake".into()),
        };
        assert_eq!(1, create(&db, req).await.unwrap().id);
        assert_eq!(
            db.into_transaction_log(),
            [
                Transaction::from_sql_and_values(
                    DatabaseBackend::Postgres,
                    r#"SELECT "group"."id", "group"."name", "group"."description" FROM "group" WHERE "group"."name" = $1 LIMIT $2"#,
                    ["admins".into(), 1u64.into()]
                ),
                Transaction::from_sql_and_values(
                    DatabaseBackend::Postgres,
                    r#"INSERT INTO "group" ("name", "description") VALUES ($1, $2) RETURNING "id", "name", "description""#,
                    ["admins".into(), "fake".into()]
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_create_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![get_group_mock(1, "admins")]])
            .into_connection();

        let req = GroupCreate {
            name: "admins".into(),
            description: None,
        };
        assert!(matches!(
            create(&db, req).await,
            Err(IdentityDatabaseError::GroupExists(..))
        ));
    }
}
