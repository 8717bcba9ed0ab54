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
//! Login: start
use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;

use super::get_upstream;
use crate::api::error::FenceApiError;
use crate::api::session::{load_session, set_session_cookie};
use crate::federation::FederationApi;
use crate::federation::login::start_login;
use crate::federation::types::{LoginQuery, LoginSession};
use crate::fence::ServiceState;

/// Start the federated login.
///
/// Redirects the browser to the authorization endpoint of the upstream
/// identity provider. The optional `redirect` is where the browser continues
/// after the login completes and must point to this service or one of the
/// allowed hosts.
#[utoipa::path(
    get,
    path = "/{provider}",
    operation_id = "/login:start",
    params(
        ("provider" = String, Path, description = "The upstream identity provider."),
        LoginQuery
    ),
    responses(
        (status = FOUND, description = "Redirect to the upstream authorization endpoint."),
        (status = UNAUTHORIZED, description = "The redirect target is not allowed."),
        (status = NOT_FOUND, description = "Unknown identity provider."),
    ),
    tag="login"
)]
#[tracing::instrument(name = "api::login::start", level = "debug", skip(state, jar), err(Debug))]
pub(super) async fn start(
    Path(provider): Path<String>,
    Query(query): Query<LoginQuery>,
    State(state): State<ServiceState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, FenceApiError> {
    let upstream = get_upstream(&state, &provider)?;
    let mut session = match load_session(&state, &jar).await? {
        Some(session) => session,
        None => LoginSession::new(state.config.session.ttl),
    };

    let url = start_login(
        upstream.oauth_client.as_ref(),
        &state.redirect_validator,
        &mut session,
        &query,
    )?;
    let session = state
        .provider
        .get_federation_provider()
        .save_login_session(&state, session)
        .await?;

    let jar = set_session_cookie(&state, jar, &session);
    Ok((jar, (StatusCode::FOUND, [(header::LOCATION, url.to_string())])).into_response())
}
