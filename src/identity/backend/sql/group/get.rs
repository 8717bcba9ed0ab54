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

use crate::db::entity::{group as db_group, prelude::Group as DbGroup};
use crate::error::DbContextExt;
use crate::identity::backend::error::IdentityDatabaseError;
use crate::identity::types::Group;

pub async fn get_model_by_name<N: AsRef<str>>(
    db: &DatabaseConnection,
    name: N,
) -> Result<Option<db_group::Model>, IdentityDatabaseError> {
    Ok(DbGroup::find()
        .filter(db_group::Column::Name.eq(name.as_ref()))
        .one(db)
        .await
        .context("fetching group by name")?)
}

pub async fn get_by_name<N: AsRef<str>>(
    db: &DatabaseConnection,
    name: N,
) -> Result<Option<Group>, IdentityDatabaseError> {
    get_model_by_name(db, name)
        .await?
        .map(TryInto::try_into)
        .transpose()
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction};

    use super::super::tests::get_group_mock;
    use super::*;

    #[tokio::test]
    async fn test_get_by_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![get_group_mock(1, "admins")]])
            .into_connection();

        assert_eq!(
            get_by_name(&db, "admins").await.unwrap().unwrap(),
            Group {
                id: 1,
                name: "admins".into(),
                description: Some("fake".into()),
            }
        );

        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"SELECT "group"."id", "group"."name", "group"."description" FROM "group" WHERE "group"."name" = $1 LIMIT $2"#,
                ["admins".into(), 1u64.into()]
            ),]
        );
    }
}
