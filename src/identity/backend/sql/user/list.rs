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

use crate::db::entity::{prelude::User as DbUser, user as db_user};
use crate::error::DbContextExt;
use crate::identity::backend::error::IdentityDatabaseError;
use crate::identity::types::User;

pub async fn list(db: &DatabaseConnection) -> Result<Vec<User>, IdentityDatabaseError> {
    let entries: Vec<db_user::Model> = DbUser::find()
        .order_by_asc(db_user::Column::Username)
        .all(db)
        .await
        .context("listing users")?;
    entries.into_iter().map(TryInto::try_into).collect()
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction};

    use super::super::tests::get_user_mock;
    use super::*;

    #[tokio::test]
    async fn test_list() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![get_user_mock(1, "alice"), get_user_mock(2, "bob")]])
            .into_connection();

        let users = list(&db).await.unwrap();
        assert_eq!(
            vec!["alice", "bob"],
            users.iter().map(|x| x.username.as_str()).collect::<Vec<_>>()
        );

        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"SELECT "user"."id", "user"."username", "user"."email", "user"."is_admin", "user"."identity_provider", "user"."active" FROM "user" ORDER BY "user"."username" ASC"#,
                []
            ),]
        );
    }
}
