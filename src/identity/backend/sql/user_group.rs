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

mod add;
mod list;
mod remove;

pub use add::add;
pub use list::{list_group_users, list_user_groups};
pub use remove::remove;

use sea_orm::DatabaseConnection;

use super::{group, user};
use crate::db::entity::{group as db_group, user as db_user};
use crate::identity::backend::error::IdentityDatabaseError;

/// Resolve both sides of the membership or report the missing one.
async fn resolve(
    db: &DatabaseConnection,
    username: &str,
    group_name: &str,
) -> Result<(db_user::Model, db_group::Model), IdentityDatabaseError> {
    let user = user::get_model_by_name(db, username)
        .await?
        .ok_or_else(|| IdentityDatabaseError::UserNotFound(username.to_string()))?;
    let group = group::get_model_by_name(db, group_name)
        .await?
        .ok_or_else(|| IdentityDatabaseError::GroupNotFound(group_name.to_string()))?;
    Ok((user, group))
}
