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
//! Administrative API
//!
//! Every operation requires the login session of an active user with the
//! administrative flag.
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::fence::ServiceState;

mod cloud_provider;
mod group;
mod project;
pub mod types;
mod user;

pub(crate) static DESCRIPTION: &str = r#"User data model administration.

Projects with their storage accesses and buckets, cloud providers, groups, users and the access privileges of users and groups on projects.
"#;

/// OpenApi specification for the administrative api.
#[derive(OpenApi)]
#[openapi(
    tags(
        (name="admin", description=DESCRIPTION),
    )
)]
pub struct ApiDoc;

pub(super) fn openapi_router() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new()
        .nest("/cloud_providers", cloud_provider::openapi_router())
        .nest("/groups", group::openapi_router())
        .nest("/projects", project::openapi_router())
        .nest("/users", user::openapi_router())
}
