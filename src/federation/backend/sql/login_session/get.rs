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

use crate::db::entity::{
    login_session as db_login_session, prelude::LoginSession as DbLoginSession,
};
use crate::error::DbContextExt;
use crate::federation::backend::error::FederationDatabaseError;
use crate::federation::types::*;

pub async fn get<I: AsRef<str>>(
    db: &DatabaseConnection,
    id: I,
) -> Result<Option<LoginSession>, FederationDatabaseError> {
    let entry: Option<db_login_session::Model> = DbLoginSession::find_by_id(id.as_ref())
        .one(db)
        .await
        .context("fetching login session")?;
    entry.map(TryInto::try_into).transpose()
}
