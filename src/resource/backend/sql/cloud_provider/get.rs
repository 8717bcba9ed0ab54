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

use crate::db::entity::{cloud_provider as db_cloud_provider, prelude::CloudProvider as DbCloudProvider};
use crate::error::DbContextExt;
use crate::resource::backend::error::ResourceDatabaseError;
use crate::resource::types::CloudProvider;

pub async fn get_model_by_name<C: ConnectionTrait, N: AsRef<str>>(
    db: &C,
    name: N,
) -> Result<Option<db_cloud_provider::Model>, ResourceDatabaseError> {
    Ok(DbCloudProvider::find()
        .filter(db_cloud_provider::Column::Name.eq(name.as_ref()))
        .one(db)
        .await
        .context("fetching cloud provider by name")?)
}

pub async fn get_by_name<C: ConnectionTrait, N: AsRef<str>>(
    db: &C,
    name: N,
) -> Result<Option<CloudProvider>, ResourceDatabaseError> {
    get_model_by_name(db, name)
        .await?
        .map(TryInto::try_into)
        .transpose()
}
