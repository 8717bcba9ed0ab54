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

use super::get::get_model_by_name;
use crate::db::entity::{
    prelude::{CloudProvider as DbCloudProvider, StorageAccess as DbStorageAccess},
    storage_access as db_storage_access,
};
use crate::error::DbContextExt;
use crate::resource::backend::error::ResourceDatabaseError;

/// Delete the cloud provider unless a project still has storage access to it.
pub async fn delete<N: AsRef<str>>(
    db: &DatabaseConnection,
    name: N,
) -> Result<(), ResourceDatabaseError> {
    let provider = get_model_by_name(db, name.as_ref())
        .await?
        .ok_or_else(|| ResourceDatabaseError::CloudProviderNotFound(name.as_ref().to_string()))?;

    if DbStorageAccess::find()
        .filter(db_storage_access::Column::ProviderId.eq(provider.id))
        .one(db)
        .await
        .context("checking cloud provider usage")?
        .is_some()
    {
        return Err(ResourceDatabaseError::CloudProviderInUse(provider.name));
    }

    DbCloudProvider::delete_by_id(provider.id)
        .exec(db)
        .await
        .context("deleting cloud provider")?;
    Ok(())
}
