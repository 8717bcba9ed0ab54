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
use crate::db::entity::group as db_group;
use crate::error::DbContextExt;
use crate::identity::backend::error::IdentityDatabaseError;
use crate::identity::types::{Group, GroupUpdate};

/// Replace the description of the group.
pub async fn update<N: AsRef<str>>(
    db: &DatabaseConnection,
    name: N,
    group: GroupUpdate,
) -> Result<Group, IdentityDatabaseError> {
    let current = get_model_by_name(db, name.as_ref())
        .await?
        .ok_or_else(|| IdentityDatabaseError::GroupNotFound(name.as_ref().to_string()))?;

    let mut entry: db_group::ActiveModel = current.into();
    entry.description = Set(group.description);
    let db_entry: db_group::Model = entry.update(db).await.context("updating group")?;
    db_entry.try_into()
}
