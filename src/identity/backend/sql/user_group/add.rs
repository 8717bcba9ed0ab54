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

use crate::db::entity::user_to_group as db_user_to_group;
use crate::error::DbContextExt;
use crate::identity::backend::error::IdentityDatabaseError;

/// Add the user to the group.
pub async fn add<U: AsRef<str>, G: AsRef<str>>(
    db: &DatabaseConnection,
    username: U,
    group_name: G,
) -> Result<(), IdentityDatabaseError> {
    let (user, group) = super::resolve(db, username.as_ref(), group_name.as_ref()).await?;
    db_user_to_group::ActiveModel {
        user_id: Set(user.id),
        group_id: Set(group.id),
    }
    .insert(db)
    .await
    .context("adding user to the group")?;
    Ok(())
}
