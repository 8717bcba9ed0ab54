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
//! Federated login API
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::federation::Upstream;
use crate::federation::error::LoginError;
use crate::fence::ServiceState;

mod callback;
mod start;

pub(crate) static DESCRIPTION: &str = r#"Federated login.

The browser is sent to the upstream identity provider with the anti-forgery `state` kept in the login session. The upstream returns to the callback which validates the identity token and logs the user in.

`idp` and `shib_idp` are passed through to the upstream; `shib_idp` only together with `idp=shibboleth`.
"#;

/// OpenApi specification for the login api.
#[derive(OpenApi)]
#[openapi(
    tags(
        (name="login", description=DESCRIPTION),
    )
)]
pub struct ApiDoc;

pub(super) fn openapi_router() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new()
        .routes(routes!(start::start))
        .routes(routes!(callback::callback))
}

/// Login completed without the post login redirect target.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Name of the logged in user.
    pub username: String,
}

/// Upstream clients serving the `provider`.
fn get_upstream<'a>(state: &'a ServiceState, provider: &str) -> Result<&'a Upstream, LoginError> {
    if provider != state.config.federation.provider_name {
        return Err(LoginError::UnknownProvider(provider.to_string()));
    }
    state.upstream.as_ref().ok_or(LoginError::NotConfigured)
}
