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
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::json;

use super::get::get_model_by_name;
use crate::db::entity::{
    bucket as db_bucket, project as db_project, project_to_bucket as db_project_to_bucket,
    storage_access as db_storage_access,
};
use crate::error::DbContextExt;
use crate::resource::backend::error::ResourceDatabaseError;
use crate::resource::backend::sql::cloud_provider;
use crate::resource::types::{Project, ProjectCreate};

/// Create the project, link it to the cloud providers and create the owned buckets.
pub async fn create(
    db: &DatabaseConnection,
    project: ProjectCreate,
) -> Result<Project, ResourceDatabaseError> {
    let name = project.project_name().to_string();
    if get_model_by_name(db, &name).await?.is_some() {
        return Err(ResourceDatabaseError::ProjectExists(name));
    }

    let txn = db.begin().await.context("starting transaction")?;
    let db_entry: db_project::Model = db_project::ActiveModel {
        id: NotSet,
        name: Set(name),
        auth_id: Set(project.auth_id),
        description: Set(project.description),
    }
    .insert(&txn)
    .await
    .context("inserting new project")?;

    for access in project.storage_accesses {
        let provider = cloud_provider::get_model_by_name(&txn, &access.provider)
            .await?
            .ok_or_else(|| ResourceDatabaseError::CloudProviderNotFound(access.provider.clone()))?;
        db_storage_access::ActiveModel {
            id: NotSet,
            project_id: Set(db_entry.id),
            provider_id: Set(provider.id),
        }
        .insert(&txn)
        .await
        .context("inserting project storage access")?;

        for bucket_name in access.buckets {
            let bucket: db_bucket::Model = db_bucket::ActiveModel {
                id: NotSet,
                name: Set(bucket_name),
                provider_id: Set(provider.id),
            }
            .insert(&txn)
            .await
            .context("inserting project bucket")?;
            db_project_to_bucket::ActiveModel {
                id: NotSet,
                project_id: Set(db_entry.id),
                bucket_id: Set(bucket.id),
                privilege: Set(Some(json!(["owner"]))),
            }
            .insert(&txn)
            .await
            .context("linking bucket to the project")?;
        }
    }
    txn.commit().await.context("committing project creation")?;

    db_entry.try_into()
}
