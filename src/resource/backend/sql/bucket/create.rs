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

use sea_orm::entity::*;
use sea_orm::query::*;
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::db::entity::{
    bucket as db_bucket, prelude::Bucket as DbBucket, project_to_bucket as db_project_to_bucket,
};
use crate::error::DbContextExt;
use crate::resource::backend::error::ResourceDatabaseError;
use crate::resource::backend::sql::{cloud_provider, project};
use crate::resource::types::{Bucket, BucketCreate};

/// Create the bucket on the cloud provider and make the project its owner.
pub async fn create_on_project<N: AsRef<str>>(
    db: &DatabaseConnection,
    project_name: N,
    bucket: BucketCreate,
) -> Result<Bucket, ResourceDatabaseError> {
    let project = project::get_model_by_name(db, project_name.as_ref())
        .await?
        .ok_or_else(|| ResourceDatabaseError::ProjectNotFound(project_name.as_ref().to_string()))?;
    let provider = cloud_provider::get_model_by_name(db, &bucket.provider)
        .await?
        .ok_or_else(|| ResourceDatabaseError::CloudProviderNotFound(bucket.provider.clone()))?;

    if DbBucket::find()
        .filter(db_bucket::Column::Name.eq(bucket.name.as_str()))
        .filter(db_bucket::Column::ProviderId.eq(provider.id))
        .one(db)
        .await
        .context("checking bucket name")?
        .is_some()
    {
        return Err(ResourceDatabaseError::BucketExists {
            bucket: bucket.name,
            provider: provider.name,
        });
    }

    let txn = db.begin().await.context("starting transaction")?;
    let db_entry: db_bucket::Model = db_bucket::ActiveModel {
        id: NotSet,
        name: Set(bucket.name),
        provider_id: Set(provider.id),
    }
    .insert(&txn)
    .await
    .context("inserting new bucket")?;
    db_project_to_bucket::ActiveModel {
        id: NotSet,
        project_id: Set(project.id),
        bucket_id: Set(db_entry.id),
        privilege: Set(Some(json!(["owner"]))),
    }
    .insert(&txn)
    .await
    .context("linking bucket to the project")?;
    txn.commit().await.context("committing bucket creation")?;

    db_entry.try_into()
}
