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

mod create;
mod delete;
mod get;
mod list;

pub use create::create;
pub use delete::delete;
pub use get::{get_by_name, get_model_by_name};
pub use list::list;

use crate::db::entity::user as db_user;
use crate::identity::backend::error::IdentityDatabaseError;
use crate::identity::types::{User, UserBuilder};

impl TryFrom<db_user::Model> for User {
    type Error = IdentityDatabaseError;

    fn try_from(value: db_user::Model) -> Result<Self, Self::Error> {
        let mut builder = UserBuilder::default();
        builder.id(value.id);
        builder.username(value.username);
        if let Some(email) = value.email {
            builder.email(email);
        }
        builder.is_admin(value.is_admin);
        if let Some(idp) = value.identity_provider {
            builder.identity_provider(idp);
        }
        builder.active(value.active);
        Ok(builder.build()?)
    }
}
