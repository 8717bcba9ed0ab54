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
//! Cloud providers
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use super::types::*;
use crate::api::error::FenceApiError;
use crate::api::session::AdminUser;
use crate::fence::ServiceState;
use crate::resource::ResourceApi;

pub(super) fn openapi_router() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new()
        .routes(routes!(create))
        .routes(routes!(show, remove))
}

/// Create cloud provider.
#[utoipa::path(
    post,
    path = "/",
    operation_id = "/admin/cloud_provider:create",
    request_body = CloudProvider,
    responses(
        (status = CREATED, description = "Cloud provider", body = CloudProvider),
        (status = CONFLICT, description = "Cloud provider exists"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(
    name = "api::admin::cloud_provider_create",
    level = "debug",
    skip(state),
    err(Debug)
)]
async fn create(
    AdminUser(_admin): AdminUser,
    State(state): State<ServiceState>,
    Json(req): Json<CloudProvider>,
) -> Result<impl IntoResponse, FenceApiError> {
    let res = state
        .provider
        .get_resource_provider()
        .create_cloud_provider(&state, req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(CloudProvider::from(res))))
}

/// Show cloud provider.
#[utoipa::path(
    get,
    path = "/{name}",
    operation_id = "/admin/cloud_provider:show",
    params(
      ("name" = String, Path, description = "The cloud provider name.")
    ),
    responses(
        (status = OK, description = "Cloud provider", body = CloudProvider),
        (status = NOT_FOUND, description = "Cloud provider not found"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(
    name = "api::admin::cloud_provider_show",
    level = "debug",
    skip(state),
    err(Debug)
)]
async fn show(
    AdminUser(_admin): AdminUser,
    Path(name): Path<String>,
    State(state): State<ServiceState>,
) -> Result<impl IntoResponse, FenceApiError> {
    state
        .provider
        .get_resource_provider()
        .get_cloud_provider(&state, &name)
        .await?
        .map(CloudProvider::from)
        .ok_or_else(|| FenceApiError::NotFound {
            resource: "cloud provider".into(),
            identifier: name,
        })
}

/// Delete cloud provider.
///
/// Cloud providers still referenced by a project storage access can not be
/// deleted.
#[utoipa::path(
    delete,
    path = "/{name}",
    operation_id = "/admin/cloud_provider:delete",
    params(
      ("name" = String, Path, description = "The cloud provider name.")
    ),
    responses(
        (status = NO_CONTENT, description = "Deleted"),
        (status = CONFLICT, description = "Cloud provider in use"),
        (status = NOT_FOUND, description = "Cloud provider not found"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(
    name = "api::admin::cloud_provider_delete",
    level = "debug",
    skip(state),
    err(Debug)
)]
async fn remove(
    AdminUser(_admin): AdminUser,
    Path(name): Path<String>,
    State(state): State<ServiceState>,
) -> Result<impl IntoResponse, FenceApiError> {
    state
        .provider
        .get_resource_provider()
        .delete_cloud_provider(&state, &name)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use tracing_test::traced_test;

    use super::super::tests::{Mocks, send};
    use crate::resource::error::ResourceProviderError;
    use crate::resource::types as provider_types;

    #[tokio::test]
    #[traced_test]
    async fn test_create() {
        let mut mocks = Mocks::default();
        mocks
            .resource
            .expect_create_cloud_provider()
            .withf(|_, req: &provider_types::CloudProviderCreate| {
                req.name == "cleversafe" && req.backend.as_deref() == Some("cleversafe")
            })
            .returning(|_, req| {
                Ok(provider_types::CloudProvider {
                    id: 1,
                    name: req.name,
                    endpoint: req.endpoint,
                    backend: req.backend,
                    service: req.service,
                    description: req.description,
                })
            });

        let (status, body) = send(
            mocks.admin_api(),
            Method::POST,
            "/cloud_providers",
            Some(json!({
                "name": "cleversafe",
                "endpoint": "https://cleversafe.example",
                "backend": "cleversafe",
                "service": "storage"
            })),
        )
        .await;

        assert_eq!(StatusCode::CREATED, status);
        assert_eq!("cleversafe", body["name"]);
        assert_eq!("storage", body["service"]);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_create_conflict() {
        let mut mocks = Mocks::default();
        mocks.resource.expect_create_cloud_provider().returning(|_, _| {
            Err(ResourceProviderError::Conflict(
                "cloud provider cleversafe already exists".into(),
            ))
        });

        let (status, body) = send(
            mocks.admin_api(),
            Method::POST,
            "/cloud_providers",
            Some(json!({"name": "cleversafe"})),
        )
        .await;

        assert_eq!(StatusCode::CONFLICT, status);
        assert_eq!(409, body["error"]["code"]);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_show() {
        let mut mocks = Mocks::default();
        mocks
            .resource
            .expect_get_cloud_provider()
            .withf(|_, name: &'_ str| name == "aws")
            .returning(|_, _| {
                Ok(Some(provider_types::CloudProvider {
                    id: 2,
                    name: "aws".into(),
                    backend: Some("aws".into()),
                    ..Default::default()
                }))
            });
        mocks
            .resource
            .expect_get_cloud_provider()
            .withf(|_, name: &'_ str| name == "gcp")
            .returning(|_, _| Ok(None));
        let api = mocks.admin_api();

        let (status, body) = send(api.clone(), Method::GET, "/cloud_providers/aws", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!("aws", body["backend"]);

        let (status, _) = send(api, Method::GET, "/cloud_providers/gcp", None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_delete_in_use() {
        let mut mocks = Mocks::default();
        mocks
            .resource
            .expect_delete_cloud_provider()
            .withf(|_, name: &'_ str| name == "aws")
            .returning(|_, _| {
                Err(ResourceProviderError::Conflict(
                    "cloud provider aws is used by project TCGA".into(),
                ))
            });

        let (status, _) = send(mocks.admin_api(), Method::DELETE, "/cloud_providers/aws", None).await;

        assert_eq!(StatusCode::CONFLICT, status);
    }
}
