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

use chrono::Utc;
use sea_orm::DatabaseConnection;
use sea_orm::entity::*;
use sea_orm::query::*;

use crate::db::entity::{
    login_session as db_login_session, prelude::LoginSession as DbLoginSession,
};
use crate::error::DbContextExt;
use crate::federation::backend::error::FederationDatabaseError;

pub async fn delete<I: AsRef<str>>(
    db: &DatabaseConnection,
    id: I,
) -> Result<(), FederationDatabaseError> {
    let res = DbLoginSession::delete_by_id(id.as_ref())
        .exec(db)
        .await
        .context("deleting login session")?;
    if res.rows_affected == 1 {
        Ok(())
    } else {
        Err(FederationDatabaseError::LoginSessionNotFound(
            id.as_ref().to_string(),
        ))
    }
}

pub async fn delete_expired(db: &DatabaseConnection) -> Result<u64, FederationDatabaseError> {
    let res = DbLoginSession::delete_many()
        .filter(db_login_session::Column::ExpiresAt.lt(Utc::now().naive_utc()))
        .exec(db)
        .await
        .context("deleting expired login sessions")?;
    Ok(res.rows_affected)
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Transaction};

    use super::*;

    #[tokio::test]
    async fn test_delete() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                rows_affected: 1,
                ..Default::default()
            }])
            .into_connection();

        delete(&db, "sid").await.unwrap();
        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"DELETE FROM "login_session" WHERE "login_session"."id" = $1"#,
                ["sid".into()]
            ),]
        );
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                rows_affected: 0,
                ..Default::default()
            }])
            .into_connection();

        assert!(matches!(
            delete(&db, "sid").await,
            Err(FederationDatabaseError::LoginSessionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_expired() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                rows_affected: 3,
                ..Default::default()
            }])
            .into_connection();

        assert_eq!(3, delete_expired(&db).await.unwrap());
        let log = db.into_transaction_log();
        assert_eq!(
            vec![r#"DELETE FROM "login_session" WHERE "login_session"."expires_at" < $1"#],
            log[0]
                .statements()
                .iter()
                .map(|x| x.sql.as_str())
                .collect::<Vec<_>>()
        );
    }
}
