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
//! Login: upstream callback
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use std::collections::HashMap;

use super::{LoginResponse, get_upstream};
use crate::api::error::FenceApiError;
use crate::api::session::load_session;
use crate::federation::FederationApi;
use crate::federation::error::LoginError;
use crate::federation::login::{LoginOutcome, ServiceLoginFinalizer, complete_login};
use crate::fence::ServiceState;

/// Complete the federated login.
///
/// Target of the upstream authorization response. The `state` must match the
/// one issued with the authorization request of the same session. On success
/// the browser is redirected to the target stored at the login start, or the
/// name of the logged in user is returned.
#[utoipa::path(
    get,
    path = "/{provider}/login",
    operation_id = "/login:callback",
    params(
        ("provider" = String, Path, description = "The upstream identity provider."),
    ),
    responses(
        (status = FOUND, description = "Redirect to the post login target."),
        (status = OK, description = "Logged in user.", body = LoginResponse),
        (status = UNAUTHORIZED, description = "State mismatch or the identity token is not valid."),
    ),
    tag="login"
)]
#[tracing::instrument(
    name = "api::login::callback",
    level = "debug",
    skip(state, jar, params),
    err(Debug)
)]
pub(super) async fn callback(
    Path(provider): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    State(state): State<ServiceState>,
    jar: CookieJar,
) -> Result<Response, FenceApiError> {
    let upstream = get_upstream(&state, &provider)?;
    let Some(mut session) = load_session(&state, &jar).await? else {
        return Err(LoginError::StateMismatch.into());
    };

    let outcome = complete_login(
        upstream.oauth_client.as_ref(),
        upstream.id_token_validator.as_ref(),
        &ServiceLoginFinalizer::new(&state),
        &mut session,
        &provider,
        &params,
    )
    .await;
    // The state is consumed also by the failed attempt.
    state
        .provider
        .get_federation_provider()
        .save_login_session(&state, session)
        .await?;

    Ok(match outcome? {
        LoginOutcome::Redirect(target) => {
            (StatusCode::FOUND, [(header::LOCATION, target)]).into_response()
        }
        LoginOutcome::Username(username) => {
            (StatusCode::OK, Json(LoginResponse { username })).into_response()
        }
    })
}
