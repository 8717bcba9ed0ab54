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
use crate::db::entity::user as db_user;
use crate::error::DbContextExt;
use crate::identity::backend::error::IdentityDatabaseError;
use crate::identity::types::{User, UserCreate};

pub async fn create(
    db: &DatabaseConnection,
    user: UserCreate,
) -> Result<User, IdentityDatabaseError> {
    if get_model_by_name(db, &user.username).await?.is_some() {
        return Err(IdentityDatabaseError::UserExists(user.username));
    }
    let entry = db_user::ActiveModel {
        id: NotSet,
        username: Set(user.username),
        email: Set(user.email),
        is_admin: Set(user.is_admin),
        identity_provider: Set(user.identity_provider),
        active: Set(true),
    };
    let db_entry: db_user::Model = entry.insert(db).await.context("inserting new user")?;
    db_entry.try_into()
}
