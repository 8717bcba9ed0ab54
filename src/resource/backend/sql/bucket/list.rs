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

use crate::db::entity::{
    bucket as db_bucket, cloud_provider as db_cloud_provider,
    prelude::{Bucket as DbBucket, CloudProvider as DbCloudProvider, ProjectToBucket as DbProjectToBucket},
    project_to_bucket as db_project_to_bucket,
};
use crate::error::DbContextExt;
use crate::resource::backend::error::ResourceDatabaseError;
use crate::resource::backend::sql::project;
use crate::resource::types::BucketInfo;

/// List buckets of the project with the names of their cloud providers.
pub async fn list_for_project<N: AsRef<str>>(
    db: &DatabaseConnection,
    project_name: N,
) -> Result<Vec<BucketInfo>, ResourceDatabaseError> {
    let project = project::get_model_by_name(db, project_name.as_ref())
        .await?
        .ok_or_else(|| ResourceDatabaseError::ProjectNotFound(project_name.as_ref().to_string()))?;

    let bucket_ids: Vec<i32> = DbProjectToBucket::find()
        .filter(db_project_to_bucket::Column::ProjectId.eq(project.id))
        .all(db)
        .await
        .context("fetching project buckets")?
        .into_iter()
        .map(|x| x.bucket_id)
        .collect();
    if bucket_ids.is_empty() {
        return Ok(Vec::new());
    }

    let buckets: Vec<db_bucket::Model> = DbBucket::find()
        .filter(db_bucket::Column::Id.is_in(bucket_ids))
        .order_by_asc(db_bucket::Column::Name)
        .all(db)
        .await
        .context("fetching buckets by id")?;
    let mut provider_ids: Vec<i32> = buckets.iter().map(|x| x.provider_id).collect();
    provider_ids.sort_unstable();
    provider_ids.dedup();
    let providers: Vec<db_cloud_provider::Model> = DbCloudProvider::find()
        .filter(db_cloud_provider::Column::Id.is_in(provider_ids))
        .all(db)
        .await
        .context("fetching bucket cloud providers")?;

    Ok(buckets
        .into_iter()
        .filter_map(|bucket| {
            providers
                .iter()
                .find(|p| p.id == bucket.provider_id)
                .map(|p| BucketInfo {
                    name: bucket.name,
                    provider: p.name.clone(),
                })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::super::super::cloud_provider::tests::get_cloud_provider_mock;
    use super::super::super::project::tests::get_project_mock;
    use super::super::tests::get_bucket_mock;
    use super::*;

    #[tokio::test]
    async fn test_list_for_project() {
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
                get_bucket_mock(10, "a", 3),
                get_bucket_mock(11, "b", 4),
            ]])
            .append_query_results([vec![
                get_cloud_provider_mock(3, "ceph"),
                get_cloud_provider_mock(4, "aws"),
            ]])
            .into_connection();

        assert_eq!(
            vec![
                BucketInfo {
                    name: "a".into(),
                    provider: "ceph".into()
                },
                BucketInfo {
                    name: "b".into(),
                    provider: "aws".into()
                }
            ],
            list_for_project(&db, "test").await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_list_for_project_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<crate::db::entity::project::Model>::new()])
            .into_connection();

        assert!(matches!(
            list_for_project(&db, "test").await,
            Err(ResourceDatabaseError::ProjectNotFound(..))
        ));
    }
}
