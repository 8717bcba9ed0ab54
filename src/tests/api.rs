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
use chrono::{TimeDelta, Utc};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;
use crate::federation::types::LoginSession;
use crate::federation::{MockFederationProvider, Upstream};
use crate::fence::{Service, ServiceState};
use crate::identity::MockIdentityProvider;
use crate::identity::types::User;
use crate::provider::Provider;

/// Id of the session referenced by [`SESSION_COOKIE`].
pub(crate) const SESSION_ID: &str = "f6a4b8c2";
pub(crate) const SESSION_COOKIE: &str = "fence=f6a4b8c2";

pub(crate) fn get_state(
    config: Config,
    provider: Provider,
    upstream: Option<Upstream>,
) -> ServiceState {
    Arc::new(
        Service::new(config, DatabaseConnection::Disconnected, provider, upstream).unwrap(),
    )
}

pub(crate) fn get_mocked_state(identity_mock: MockIdentityProvider) -> ServiceState {
    let provider = Provider::mocked_builder()
        .identity(identity_mock)
        .build()
        .unwrap();
    get_state(Config::default(), provider, None)
}

/// Session of the logged in `username`.
pub(crate) fn authenticated_session(username: &str) -> LoginSession {
    LoginSession {
        id: SESSION_ID.into(),
        state: None,
        redirect: None,
        username: Some(username.into()),
        provider: Some("fence".into()),
        expires_at: Utc::now() + TimeDelta::hours(1),
    }
}

/// Let the [`SESSION_COOKIE`] resolve to the session of the administrator `admin`.
pub(crate) fn expect_admin_session(
    federation_mock: &mut MockFederationProvider,
    identity_mock: &mut MockIdentityProvider,
) {
    federation_mock
        .expect_get_login_session()
        .withf(|_, id: &'_ str| id == SESSION_ID)
        .returning(|_, _| Ok(Some(authenticated_session("admin"))));
    identity_mock
        .expect_get_user()
        .withf(|_, username: &'_ str| username == "admin")
        .returning(|_, _| {
            Ok(Some(User {
                id: 1,
                username: "admin".into(),
                is_admin: true,
                active: true,
                ..Default::default()
            }))
        });
}
