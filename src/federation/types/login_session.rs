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
//! Login session of a browser.

use chrono::{DateTime, TimeDelta, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::BuilderError;

/// Login session bound to the browser by the session cookie.
///
/// Before the login completes the session carries the anti-forgery `state`
/// issued with the authorization request and the optional `redirect` target.
/// Both are read-once. After the login the session names the authenticated
/// user and the upstream provider.
#[derive(Builder, Clone, Debug, Deserialize, PartialEq, Serialize)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct LoginSession {
    /// Opaque session id.
    pub id: String,

    #[builder(default)]
    pub state: Option<String>,

    #[builder(default)]
    pub redirect: Option<String>,

    /// Authenticated user.
    #[builder(default)]
    pub username: Option<String>,

    /// Upstream provider which authenticated the user.
    #[builder(default)]
    pub provider: Option<String>,

    pub expires_at: DateTime<Utc>,
}

impl LoginSession {
    /// Start a new anonymous session living for `ttl` seconds.
    pub fn new(ttl: u64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().simple().to_string(),
            state: None,
            redirect: None,
            username: None,
            provider: None,
            expires_at: Utc::now() + TimeDelta::seconds(i64::try_from(ttl).unwrap_or(i64::MAX)),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }

    pub fn set_state<S: Into<String>>(&mut self, state: S) {
        self.state = Some(state.into());
    }

    /// Read and clear the stored state.
    pub fn take_state(&mut self) -> Option<String> {
        self.state.take()
    }

    /// Store the post login target. `None` drops a previously stored one.
    pub fn set_redirect(&mut self, redirect: Option<String>) {
        self.redirect = redirect;
    }

    /// Read and clear the post login target.
    pub fn take_redirect(&mut self) -> Option<String> {
        self.redirect.take()
    }

    /// Mark the session as authenticated.
    pub fn authenticate<U: Into<String>, P: Into<String>>(&mut self, username: U, provider: P) {
        self.username = Some(username.into());
        self.provider = Some(provider.into());
    }

    pub fn is_authenticated(&self) -> bool {
        self.username.is_some() && !self.is_expired()
    }
}
