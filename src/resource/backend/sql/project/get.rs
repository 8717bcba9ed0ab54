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

use sea_orm::ConnectionTrait;
use sea_orm::entity::*;
use sea_orm::query::*;

use crate::db::entity::{
    bucket as db_bucket,
    prelude::{Bucket as DbBucket, Project as DbProject, ProjectToBucket as DbProjectToBucket},
    project as db_project, project_to_bucket as db_project_to_bucket,
};
use crate::error::DbContextExt;
use crate::resource::backend::error::ResourceDatabaseError;
use crate::resource::types::{Project, ProjectInfo};

pub async fn get_model_by_name<C: ConnectionTrait, N: AsRef<str>>(
    db: &C,
    name: N,
) -> Result<Option<db_project::Model>, ResourceDatabaseError> {
    Ok(DbProject::find()
        .filter(db_project::Column::Name.eq(name.as_ref()))
        .one(db)
        .await
        .context("fetching project by name")?)
}

pub async fn get_by_name<C: ConnectionTrait, N: AsRef<str>>(
    db: &C,
    name: N,
) -> Result<Option<Project>, ResourceDatabaseError> {
    get_model_by_name(db, name)
        .await?
        .map(TryInto::try_into)
        .transpose()
}

pub async fn get_by_auth_id<C: ConnectionTrait, A: AsRef<str>>(
    db: &C,
    auth_id: A,
) -> Result<Option<Project>, ResourceDatabaseError> {
    DbProject::find()
        .filter(db_project::Column::AuthId.eq(auth_id.as_ref()))
        .one(db)
        .await
        .context("fetching project by auth_id")?
        .map(TryInto::try_into)
        .transpose()
}

/// Names of the buckets associated with the projects keyed by the project id.
pub(super) async fn get_bucket_names<C: ConnectionTrait>(
    db: &C,
    project_ids: Vec<i32>,
) -> Result<Vec<(i32, String)>, ResourceDatabaseError> {
    if project_ids.is_empty() {
        return Ok(Vec::new());
    }
    let links: Vec<db_project_to_bucket::Model> = DbProjectToBucket::find()
        .filter(db_project_to_bucket::Column::ProjectId.is_in(project_ids))
        .order_by_asc(db_project_to_bucket::Column::Id)
        .all(db)
        .await
        .context("fetching project buckets")?;
    if links.is_empty() {
        return Ok(Vec::new());
    }
    let buckets: Vec<db_bucket::Model> = DbBucket::find()
        .filter(db_bucket::Column::Id.is_in(links.iter().map(|x| x.bucket_id)))
        .all(db)
        .await
        .context("fetching buckets by id")?;
    Ok(links
        .into_iter()
        .filter_map(|link| {
            buckets
                .iter()
                .find(|b| b.id == link.bucket_id)
                .map(|b| (link.project_id, b.name.clone()))
        })
        .collect())
}

/// Get project with the names of the associated buckets.
pub async fn get_info<C: ConnectionTrait, N: AsRef<str>>(
    db: &C,
    name: N,
) -> Result<Option<ProjectInfo>, ResourceDatabaseError> {
    if let Some(project) = get_model_by_name(db, name).await? {
        let buckets = get_bucket_names(db, vec![project.id])
            .await?
            .into_iter()
            .map(|(_, name)| name)
            .collect();
        return Ok(Some(ProjectInfo::new(project.try_into()?, buckets)));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction};

    use super::super::tests::get_project_mock;
    use super::*;

    #[tokio::test]
    async fn test_get_by_auth_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![get_project_mock(1, "test")]])
            .into_connection();

        let project = get_by_auth_id(&db, "phs000001").await.unwrap().unwrap();
        assert_eq!("test", project.name);
        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"SELECT "project"."id", "project"."name", "project"."auth_id", "project"."description" FROM "project" WHERE "project"."auth_id" = $1 LIMIT $2"#,
                ["phs000001".into(), 1u64.into()]
            ),]
        );
    }

    #[tokio::test]
    async fn test_get_info() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![get_project_mock(1, "test")]])
            .append_query_results([vec![
                db_project_to_bucket::Model {
                    id: 1,
                    project_id: 1,
                    bucket_id: 10,
                    privilege: None,
                },
                db_project_to_bucket::Model {
                    id: 2,
                    project_id: 1,
                    bucket_id: 11,
                    privilege: None,
                },
            ]])
            .append_query_results([vec![
                db_bucket::Model {
                    id: 11,
                    name: "b2".into(),
                    provider_id: 1,
                },
                db_bucket::Model {
                    id: 10,
                    name: "b1".into(),
                    provider_id: 1,
                },
            ]])
            .into_connection();

        let info = get_info(&db, "test").await.unwrap().unwrap();
        assert_eq!(vec!["b1".to_string(), "b2".to_string()], info.buckets);
        assert_eq!("phs000001", info.auth_id);

        assert_eq!(
            db.into_transaction_log(),
            [
                Transaction::from_sql_and_values(
                    DatabaseBackend::Postgres,
                    r#"SELECT "project"."id", "project"."name", "project"."auth_id", "project"."description" FROM "project" WHERE "project"."name" = $1 LIMIT $2"#,
                    ["test".into(), 1u64.into()]
                ),
                Transaction::from_sql_and_values(
                    DatabaseBackend::Postgres,
                    r#"SELECT "project_to_bucket"."id", "project_to_bucket"."project_id", "project_to_bucket"."bucket_id", "project_to_bucket"."privilege" FROM "project_to_bucket" WHERE "project_to_bucket"."project_id" IN ($1) ORDER BY "project_to_bucket"."id" ASC"#,
                    [1i32.into()]
                ),
                Transaction::from_sql_and_values(
                    DatabaseBackend::Postgres,
                    r#"SELECT "bucket"."id", "bucket"."name", "bucket"."provider_id" FROM "bucket" WHERE "bucket"."id" IN ($1, $2)"#,
                    [10i32.into(), 11i32.into()]
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_get_info_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<db_project::Model>::new()])
            .into_connection();
        assert!(get_info(&db, "none").await.unwrap().is_none());
    }
}
