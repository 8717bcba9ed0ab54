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
//! Logout
use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::error::FenceApiError;
use crate::api::session::remove_session_cookie;
use crate::federation::FederationApi;
use crate::federation::error::FederationProviderError;
use crate::fence::ServiceState;

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(super) struct LogoutQuery {
    /// Where to continue after the logout.
    next: Option<String>,
}

/// Log out.
///
/// Drops the login session and expires the session cookie.
#[utoipa::path(
    get,
    path = "/logout",
    operation_id = "/logout",
    params(LogoutQuery),
    responses(
        (status = FOUND, description = "Redirect to the `next` target."),
        (status = NO_CONTENT, description = "Logged out."),
        (status = UNAUTHORIZED, description = "The `next` target is not allowed."),
    ),
    tag="login"
)]
#[tracing::instrument(name = "api::logout", level = "debug", skip(state, jar), err(Debug))]
pub(super) async fn logout(
    Query(query): Query<LogoutQuery>,
    State(state): State<ServiceState>,
    jar: CookieJar,
) -> Result<Response, FenceApiError> {
    if let Some(next) = &query.next {
        state.redirect_validator.validate(next)?;
    }
    if let Some(cookie) = jar.get(&state.config.session.cookie_name) {
        match state
            .provider
            .get_federation_provider()
            .delete_login_session(&state, cookie.value())
            .await
        {
            Ok(()) | Err(FederationProviderError::LoginSessionNotFound(_)) => {}
            Err(err) => return Err(err.into()),
        }
    }

    let jar = remove_session_cookie(&state, jar);
    Ok(match query.next {
        Some(next) => (jar, (StatusCode::FOUND, [(header::LOCATION, next)])).into_response(),
        None => (jar, StatusCode::NO_CONTENT).into_response(),
    })
}
