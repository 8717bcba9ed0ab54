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
//! Fence API
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::api::error::FenceApiError;
use crate::fence::ServiceState;

pub mod admin;
pub mod error;
pub mod login;
mod logout;
pub mod session;

#[derive(OpenApi)]
#[openapi(
    info(title = "Fence", version = "0.1.0"),
    modifiers(&SecurityAddon),
    tags(
        (name="login", description=login::DESCRIPTION),
        (name="admin", description=admin::DESCRIPTION),
        (name="status", description="Service status"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    "fence",
                    "Login session established by the federated login",
                ))),
            );
        }
    }
}

pub fn openapi_router() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new()
        .nest("/login", login::openapi_router())
        .nest("/admin", admin::openapi_router())
        .routes(routes!(logout::logout))
        .routes(routes!(status))
}

/// Health check
#[utoipa::path(
    get,
    path = "/_status",
    description = "Health check verifying the database connection",
    responses(
        (status = OK, description = "Healthy", body = String),
        (status = INTERNAL_SERVER_ERROR, description = "Database is not reachable"),
    ),
    tag = "status"
)]
async fn status(State(state): State<ServiceState>) -> Result<impl IntoResponse, FenceApiError> {
    state
        .db
        .ping()
        .await
        .map_err(|err| FenceApiError::InternalError(err.to_string()))?;
    Ok((StatusCode::OK, "Healthy"))
}
