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

use crate::db::entity::{prelude::User as DbUser, user as db_user};
use crate::error::DbContextExt;
use crate::identity::backend::error::IdentityDatabaseError;
use crate::identity::types::User;

/// Fetch the raw user record by the name.
pub async fn get_model_by_name<U: AsRef<str>>(
    db: &DatabaseConnection,
    username: U,
) -> Result<Option<db_user::Model>, IdentityDatabaseError> {
    Ok(DbUser::find()
        .filter(db_user::Column::Username.eq(username.as_ref()))
        .one(db)
        .await
        .context("fetching user by name")?)
}

pub async fn get_by_name<U: AsRef<str>>(
    db: &DatabaseConnection,
    username: U,
) -> Result<Option<User>, IdentityDatabaseError> {
    get_model_by_name(db, username)
        .await?
        .map(TryInto::try_into)
        .transpose()
}
