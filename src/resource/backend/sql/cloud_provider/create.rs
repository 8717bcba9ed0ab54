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

use super::get::get_model_by_name;
use crate::db::entity::cloud_provider as db_cloud_provider;
use crate::error::DbContextExt;
use crate::resource::backend::error::ResourceDatabaseError;
use crate::resource::types::{CloudProvider, CloudProviderCreate};

pub async fn create(
    db: &DatabaseConnection,
    provider: CloudProviderCreate,
) -> Result<CloudProvider, ResourceDatabaseError> {
    if get_model_by_name(db, &provider.name).await?.is_some() {
        return Err(ResourceDatabaseError::CloudProviderExists(provider.name));
    }
    let entry = db_cloud_provider::ActiveModel {
        id: NotSet,
        name: Set(provider.name),
        endpoint: Set(provider.endpoint),
        backend: Set(provider.backend),
        service: Set(provider.service),
        description: Set(provider.description),
    };
    let db_entry: db_cloud_provider::Model = entry
        .insert(db)
        .await
        .context("inserting new cloud provider")?;
    db_entry.try_into()
}
