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

use super::get::get_bucket_names;
use crate::db::entity::{prelude::Project as DbProject, project as db_project};
use crate::error::DbContextExt;
use crate::resource::backend::error::ResourceDatabaseError;
use crate::resource::types::{Project, ProjectInfo};

/// List all projects with the associated bucket names.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<ProjectInfo>, ResourceDatabaseError> {
    let projects: Vec<db_project::Model> = DbProject::find()
        .order_by_asc(db_project::Column::Name)
        .all(db)
        .await
        .context("listing projects")?;
    let buckets = get_bucket_names(db, projects.iter().map(|x| x.id).collect()).await?;

    let mut res = Vec::with_capacity(projects.len());
    for project in projects {
        let names = buckets
            .iter()
            .filter(|(pid, _)| *pid == project.id)
            .map(|(_, name)| name.clone())
            .collect();
        let project: Project = project.try_into()?;
        res.push(ProjectInfo::new(project, names));
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::super::tests::get_project_mock;
    use super::*;
    use crate::db::entity::{bucket as db_bucket, project_to_bucket as db_project_to_bucket};

    #[tokio::test]
    async fn test_list() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![get_project_mock(1, "a"), get_project_mock(2, "b")]])
            .append_query_results([vec![db_project_to_bucket::Model {
                id: 1,
                project_id: 2,
                bucket_id: 10,
                privilege: None,
            }]])
            .append_query_results([vec![db_bucket::Model {
                id: 10,
                name: "bucket".into(),
                provider_id: 1,
            }]])
            .into_connection();

        let projects = list(&db).await.unwrap();
        assert_eq!(2, projects.len());
        assert!(projects[0].buckets.is_empty());
        assert_eq!(vec!["bucket".to_string()], projects[1].buckets);
        assert_eq!(3, db.into_transaction_log().len());
    }

    #[tokio::test]
    async fn test_list_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<db_project::Model>::new()])
            .into_connection();

        assert!(list(&db).await.unwrap().is_empty());
        assert_eq!(1, db.into_transaction_log().len());
    }
}
