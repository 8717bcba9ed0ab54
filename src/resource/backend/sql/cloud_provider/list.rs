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
    cloud_provider as db_cloud_provider,
    prelude::{CloudProvider as DbCloudProvider, StorageAccess as DbStorageAccess},
    storage_access as db_storage_access,
};
use crate::error::DbContextExt;
use crate::resource::backend::error::ResourceDatabaseError;
use crate::resource::backend::sql::project;
use crate::resource::types::CloudProvider;

/// List cloud providers the project has storage access to.
pub async fn list_for_project<N: AsRef<str>>(
    db: &DatabaseConnection,
    project_name: N,
) -> Result<Vec<CloudProvider>, ResourceDatabaseError> {
    let project = project::get_model_by_name(db, project_name.as_ref())
        .await?
        .ok_or_else(|| ResourceDatabaseError::ProjectNotFound(project_name.as_ref().to_string()))?;
    let provider_ids: Vec<i32> = DbStorageAccess::find()
        .filter(db_storage_access::Column::ProjectId.eq(project.id))
        .all(db)
        .await
        .context("fetching project storage access")?
        .into_iter()
        .map(|x| x.provider_id)
        .collect();
    if provider_ids.is_empty() {
        return Ok(Vec::new());
    }
    DbCloudProvider::find()
        .filter(db_cloud_provider::Column::Id.is_in(provider_ids))
        .order_by_asc(db_cloud_provider::Column::Name)
        .all(db)
        .await
        .context("fetching cloud providers by id")?
        .into_iter()
        .map(TryInto::try_into)
        .collect()
}
