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
//! # Login session cookie
//!
//! The browser only carries the opaque id of the [`LoginSession`]; the
//! session itself lives in the federation backend.
use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::debug;

use crate::api::error::FenceApiError;
use crate::federation::FederationApi;
use crate::federation::types::LoginSession;
use crate::fence::ServiceState;
use crate::identity::IdentityApi;
use crate::identity::types::User;

/// Load the not yet expired login session referenced by the cookie.
pub(crate) async fn load_session(
    state: &ServiceState,
    jar: &CookieJar,
) -> Result<Option<LoginSession>, FenceApiError> {
    let Some(cookie) = jar.get(&state.config.session.cookie_name) else {
        return Ok(None);
    };
    Ok(state
        .provider
        .get_federation_provider()
        .get_login_session(state, cookie.value())
        .await?
        .filter(|session| {
            if session.is_expired() {
                debug!("ignoring expired login session {}", session.id);
                return false;
            }
            true
        }))
}

/// Add the cookie referencing the `session` to the jar.
pub(crate) fn set_session_cookie(
    state: &ServiceState,
    jar: CookieJar,
    session: &LoginSession,
) -> CookieJar {
    let cookie = Cookie::build((
        state.config.session.cookie_name.clone(),
        session.id.clone(),
    ))
    .path("/")
    .http_only(true)
    .secure(state.config.session.secure)
    .same_site(SameSite::Lax)
    .max_age(time::Duration::seconds(
        i64::try_from(state.config.session.ttl).unwrap_or(i64::MAX),
    ));
    jar.add(cookie)
}

/// Expire the session cookie in the browser.
pub(crate) fn remove_session_cookie(state: &ServiceState, jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(state.config.session.cookie_name.clone()).path("/"))
}

/// Active user with the administrative flag logged in through the session.
#[derive(Clone, Debug)]
pub struct AdminUser(pub User);

impl FromRequestParts<ServiceState> for AdminUser {
    type Rejection = FenceApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServiceState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let username = load_session(state, &jar)
            .await?
            .filter(LoginSession::is_authenticated)
            .and_then(|session| session.username)
            .ok_or(FenceApiError::Unauthorized(None))?;

        let user = state
            .provider
            .get_identity_provider()
            .get_user(state, &username)
            .await?
            .filter(|user| user.active)
            .ok_or(FenceApiError::Unauthorized(None))?;
        if !user.is_admin {
            return Err(FenceApiError::Forbidden);
        }
        Ok(Self(user))
    }
}
