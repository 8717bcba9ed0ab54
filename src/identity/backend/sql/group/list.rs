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

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Group>, IdentityDatabaseError> {
    let entries: Vec<db_group::Model> = DbGroup::find()
        .order_by_asc(db_group::Column::Name)
        .all(db)
        .await
        .context("listing groups")?;
    entries.into_iter().map(TryInto::try_into).collect()
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction};

    use super::super::tests::get_group_mock;
    use super::*;

    #[tokio::test]
    async fn test_list() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![get_group_mock(1, "a"), get_group_mock(2, "b")]])
            .into_connection();

        assert_eq!(2, list(&db).await.unwrap().len());
        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"SELECT "group"."id", "group"."name", "group"."description" FROM "group" ORDER BY "group"."name" ASC"#,
                []
            ),]
        );
    }
}
