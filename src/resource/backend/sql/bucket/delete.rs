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
use tracing::warn;

use crate::db::entity::{
    bucket as db_bucket,
    prelude::{Bucket as DbBucket, ProjectToBucket as DbProjectToBucket},
    project_to_bucket as db_project_to_bucket,
};
use crate::error::DbContextExt;
use crate::resource::backend::error::ResourceDatabaseError;
use crate::resource::backend::sql::project;

/// Delete the bucket and its link to the project.
///
/// A bucket which is not linked to the project is deleted anyway.
pub async fn delete_on_project<P: AsRef<str>, B: AsRef<str>>(
    db: &DatabaseConnection,
    project_name: P,
    bucket_name: B,
) -> Result<(), ResourceDatabaseError> {
    let bucket = DbBucket::find()
        .filter(db_bucket::Column::Name.eq(bucket_name.as_ref()))
        .one(db)
        .await
        .context("fetching bucket by name")?
        .ok_or_else(|| ResourceDatabaseError::BucketNotFound(bucket_name.as_ref().to_string()))?;
    let project = project::get_model_by_name(db, project_name.as_ref())
        .await?
        .ok_or_else(|| ResourceDatabaseError::ProjectNotFound(project_name.as_ref().to_string()))?;

    let txn = db.begin().await.context("starting transaction")?;
    let res = DbProjectToBucket::delete_many()
        .filter(db_project_to_bucket::Column::BucketId.eq(bucket.id))
        .filter(db_project_to_bucket::Column::ProjectId.eq(project.id))
        .exec(&txn)
        .await
        .context("unlinking bucket from the project")?;
    if res.rows_affected == 0 {
        warn!(
            "bucket {} is not linked to the project {}, deleting it anyway",
            bucket.name, project.name
        );
    }
    DbBucket::delete_by_id(bucket.id)
        .exec(&txn)
        .await
        .context("deleting bucket")?;
    txn.commit().await.context("committing bucket deletion")?;
    Ok(())
}
