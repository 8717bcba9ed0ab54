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

use crate::db::entity::{
    login_session as db_login_session, prelude::LoginSession as DbLoginSession,
};
use crate::error::DbContextExt;
use crate::federation::backend::error::FederationDatabaseError;
use crate::federation::types::*;

/// Insert the login session or update the stored one.
pub async fn save(
    db: &DatabaseConnection,
    rec: LoginSession,
) -> Result<LoginSession, FederationDatabaseError> {
    let existing = DbLoginSession::find_by_id(rec.id.as_str())
        .one(db)
        .await
        .context("fetching login session")?;

    let db_entry: db_login_session::Model = if let Some(existing) = existing {
        let mut entry: db_login_session::ActiveModel = existing.into();
        entry.state = Set(rec.state);
        entry.redirect = Set(rec.redirect);
        entry.username = Set(rec.username);
        entry.provider = Set(rec.provider);
        entry.expires_at = Set(rec.expires_at.naive_utc());
        entry
            .update(db)
            .await
            .context("updating login session")?
    } else {
        db_login_session::ActiveModel {
            id: Set(rec.id),
            state: Set(rec.state),
            redirect: Set(rec.redirect),
            username: Set(rec.username),
            provider: Set(rec.provider),
            expires_at: Set(rec.expires_at.naive_utc()),
        }
        .insert(db)
        .await
        .context("persisting login session")?
    };

    db_entry.try_into()
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction};

    use super::super::tests::get_login_session_mock;
    use super::*;

    fn session() -> LoginSession {
        LoginSession {
            id: "sid".into(),
            state: Some("state".into()),
            redirect: None,
            username: None,
            provider: None,
            expires_at: DateTime::<Utc>::default(),
        }
    }

    #[tokio::test]
    async fn test_save_new() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<db_login_session::Model>::new()])
            .append_query_results([vec![get_login_session_mock("sid")]])
            .into_connection();

        assert_eq!(session(), save(&db, session()).await.unwrap());
        assert_eq!(
            db.into_transaction_log()[1],
            Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"INSERT INTO "login_session" ("id", "state", "redirect", "username", "provider", "expires_at") VALUES ($1, $2, $3, $4, $5, $6) RETURNING "id", "state", "redirect", "username", "provider", "expires_at""#,
                [
                    "sid".into(),
                    "state".into(),
                    Option::<String>::None.into(),
                    Option::<String>::None.into(),
                    Option::<String>::None.into(),
                    NaiveDateTime::default().into(),
                ]
            )
        );
    }

    #[tokio::test]
    async fn test_save_existing() {
        let mut stored = get_login_session_mock("sid");
        stored.username = Some("alice".into());
        stored.provider = Some("fence".into());
        stored.state = None;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![get_login_session_mock("sid")]])
            .append_query_results([vec![stored]])
            .into_connection();

        let mut rec = session();
        rec.state = None;
        rec.authenticate("alice", "fence");
        let res = save(&db, rec).await.unwrap();
        assert_eq!(Some("alice".to_string()), res.username);

        let log = db.into_transaction_log();
        assert_eq!(2, log.len());
        assert!(
            log[1].statements()[0]
                .sql
                .starts_with(r#"UPDATE "login_session" SET "state" = $1, "redirect" = $2, "username" = $3, "provider" = $4, "expires_at" = $5 WHERE "login_session"."id" = $6"#)
        );
    }
}
