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

use crate::db::entity::login_session as db_login_session;
use crate::federation::backend::error::FederationDatabaseError;
use crate::federation::types::*;

mod delete;
mod get;
mod save;

pub use delete::{delete, delete_expired};
pub use get::get;
pub use save::save;

impl TryFrom<db_login_session::Model> for LoginSession {
    type Error = FederationDatabaseError;

    fn try_from(value: db_login_session::Model) -> Result<Self, Self::Error> {
        let mut builder = LoginSessionBuilder::default();
        builder.id(value.id.clone());
        if let Some(val) = value.state {
            builder.state(val);
        }
        if let Some(val) = value.redirect {
            builder.redirect(val);
        }
        if let Some(val) = value.username {
            builder.username(val);
        }
        if let Some(val) = value.provider {
            builder.provider(val);
        }
        builder.expires_at(value.expires_at.and_utc());
        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use crate::db::entity::login_session as db_login_session;

    pub(super) fn get_login_session_mock<S: AsRef<str>>(id: S) -> db_login_session::Model {
        db_login_session::Model {
            id: id.as_ref().into(),
            state: Some("state".into()),
            redirect: None,
            username: None,
            provider: None,
            expires_at: NaiveDateTime::default(),
        }
    }
}
