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
//! Projects and their buckets
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
        .routes(routes!(list, create))
        .routes(routes!(show, remove))
        .routes(routes!(list_buckets, create_bucket))
        .routes(routes!(remove_bucket))
}

/// List projects.
#[utoipa::path(
    get,
    path = "/",
    operation_id = "/admin/project:list",
    responses(
        (status = OK, description = "List of projects", body = ProjectList),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(name = "api::admin::project_list", level = "debug", skip(state), err(Debug))]
async fn list(
    AdminUser(_admin): AdminUser,
    State(state): State<ServiceState>,
) -> Result<impl IntoResponse, FenceApiError> {
    let projects = state
        .provider
        .get_resource_provider()
        .list_projects(&state)
        .await?;
    Ok(ProjectList {
        projects: projects.into_iter().map(Into::into).collect(),
    })
}

/// Create project.
///
/// Creates the project together with the storage accesses to the listed cloud
/// providers and the buckets on them.
#[utoipa::path(
    post,
    path = "/",
    operation_id = "/admin/project:create",
    request_body = ProjectCreateRequest,
    responses(
        (status = CREATED, description = "Project", body = Project),
        (status = CONFLICT, description = "Project or bucket exists"),
        (status = NOT_FOUND, description = "Cloud provider not found"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(name = "api::admin::project_create", level = "debug", skip(state), err(Debug))]
async fn create(
    AdminUser(_admin): AdminUser,
    State(state): State<ServiceState>,
    Json(req): Json<ProjectCreateRequest>,
) -> Result<impl IntoResponse, FenceApiError> {
    let buckets = req
        .storage_accesses
        .iter()
        .flat_map(|access| access.buckets.iter().cloned())
        .collect();
    let project = state
        .provider
        .get_resource_provider()
        .create_project(&state, req.into())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(Project {
            name: project.name,
            auth_id: project.auth_id,
            description: project.description,
            buckets,
        }),
    ))
}

/// Show project.
#[utoipa::path(
    get,
    path = "/{name}",
    operation_id = "/admin/project:show",
    params(
      ("name" = String, Path, description = "The project name.")
    ),
    responses(
        (status = OK, description = "Project with the bucket names", body = Project),
        (status = NOT_FOUND, description = "Project not found"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(name = "api::admin::project_show", level = "debug", skip(state), err(Debug))]
async fn show(
    AdminUser(_admin): AdminUser,
    Path(name): Path<String>,
    State(state): State<ServiceState>,
) -> Result<impl IntoResponse, FenceApiError> {
    state
        .provider
        .get_resource_provider()
        .get_project_info(&state, &name)
        .await?
        .map(Project::from)
        .ok_or_else(|| FenceApiError::NotFound {
            resource: "project".into(),
            identifier: name,
        })
}

/// Delete project.
///
/// The project must not own any bucket. Users whose only access was to this
/// project are deleted as well.
#[utoipa::path(
    delete,
    path = "/{name}",
    operation_id = "/admin/project:delete",
    params(
      ("name" = String, Path, description = "The project name.")
    ),
    responses(
        (status = OK, description = "Deleted", body = ProjectDeleteResponse),
        (status = CONFLICT, description = "Project still owns buckets"),
        (status = NOT_FOUND, description = "Project not found"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(name = "api::admin::project_delete", level = "debug", skip(state), err(Debug))]
async fn remove(
    AdminUser(_admin): AdminUser,
    Path(name): Path<String>,
    State(state): State<ServiceState>,
) -> Result<impl IntoResponse, FenceApiError> {
    let deleted_users = state
        .provider
        .get_resource_provider()
        .delete_project(&state, &name)
        .await?;
    Ok(ProjectDeleteResponse { deleted_users })
}

/// List project buckets.
#[utoipa::path(
    get,
    path = "/{name}/buckets",
    operation_id = "/admin/project/bucket:list",
    params(
      ("name" = String, Path, description = "The project name.")
    ),
    responses(
        (status = OK, description = "Buckets of the project", body = BucketList),
        (status = NOT_FOUND, description = "Project not found"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(name = "api::admin::bucket_list", level = "debug", skip(state), err(Debug))]
async fn list_buckets(
    AdminUser(_admin): AdminUser,
    Path(name): Path<String>,
    State(state): State<ServiceState>,
) -> Result<impl IntoResponse, FenceApiError> {
    let buckets = state
        .provider
        .get_resource_provider()
        .list_project_buckets(&state, &name)
        .await?;
    Ok(BucketList {
        buckets: buckets.into_iter().map(Into::into).collect(),
    })
}

/// Create bucket on project.
#[utoipa::path(
    post,
    path = "/{name}/buckets",
    operation_id = "/admin/project/bucket:create",
    params(
      ("name" = String, Path, description = "The project name.")
    ),
    request_body = Bucket,
    responses(
        (status = CREATED, description = "Bucket", body = Bucket),
        (status = CONFLICT, description = "Bucket name used on the cloud provider"),
        (status = NOT_FOUND, description = "Project or cloud provider not found"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(name = "api::admin::bucket_create", level = "debug", skip(state), err(Debug))]
async fn create_bucket(
    AdminUser(_admin): AdminUser,
    Path(name): Path<String>,
    State(state): State<ServiceState>,
    Json(req): Json<Bucket>,
) -> Result<impl IntoResponse, FenceApiError> {
    let provider = req.provider.clone();
    let bucket = state
        .provider
        .get_resource_provider()
        .create_bucket_on_project(&state, &name, req.into())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(Bucket {
            name: bucket.name,
            provider,
        }),
    ))
}

/// Delete bucket of project.
#[utoipa::path(
    delete,
    path = "/{name}/buckets/{bucket}",
    operation_id = "/admin/project/bucket:delete",
    params(
      ("name" = String, Path, description = "The project name."),
      ("bucket" = String, Path, description = "The bucket name."),
    ),
    responses(
        (status = NO_CONTENT, description = "Deleted"),
        (status = NOT_FOUND, description = "Bucket not found"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(name = "api::admin::bucket_delete", level = "debug", skip(state), err(Debug))]
async fn remove_bucket(
    AdminUser(_admin): AdminUser,
    Path((name, bucket)): Path<(String, String)>,
    State(state): State<ServiceState>,
) -> Result<impl IntoResponse, FenceApiError> {
    state
        .provider
        .get_resource_provider()
        .delete_bucket_on_project(&state, &name, &bucket)
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
    async fn test_list() {
        let mut mocks = Mocks::default();
        mocks.resource.expect_list_projects().returning(|_| {
            Ok(vec![provider_types::ProjectInfo {
                id: 1,
                name: "TCGA".into(),
                auth_id: "phs000178".into(),
                description: None,
                buckets: vec!["tcga-bucket".into()],
            }])
        });

        let (status, body) = send(mocks.admin_api(), Method::GET, "/projects", None).await;

        assert_eq!(StatusCode::OK, status);
        assert_eq!(
            json!({"projects": [{
                "name": "TCGA",
                "auth_id": "phs000178",
                "description": null,
                "buckets": ["tcga-bucket"]
            }]}),
            body
        );
    }

    #[tokio::test]
    #[traced_test]
    async fn test_create() {
        let mut mocks = Mocks::default();
        mocks
            .resource
            .expect_create_project()
            .withf(|_, req: &provider_types::ProjectCreate| {
                req.auth_id == "phs000178"
                    && req.storage_accesses.len() == 1
                    && req.storage_accesses[0].provider == "cleversafe"
            })
            .returning(|_, req| {
                Ok(provider_types::Project {
                    id: 1,
                    name: req.project_name().into(),
                    auth_id: req.auth_id,
                    description: None,
                })
            });

        let (status, body) = send(
            mocks.admin_api(),
            Method::POST,
            "/projects",
            Some(json!({
                "auth_id": "phs000178",
                "storage_accesses": [{"provider": "cleversafe", "buckets": ["b1", "b2"]}]
            })),
        )
        .await;

        assert_eq!(StatusCode::CREATED, status);
        assert_eq!("phs000178", body["name"]);
        assert_eq!(json!(["b1", "b2"]), body["buckets"]);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_show_not_found() {
        let mut mocks = Mocks::default();
        mocks
            .resource
            .expect_get_project_info()
            .withf(|_, name: &'_ str| name == "missing")
            .returning(|_, _| Ok(None));

        let (status, body) = send(mocks.admin_api(), Method::GET, "/projects/missing", None).await;

        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!(404, body["error"]["code"]);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_delete_with_buckets() {
        let mut mocks = Mocks::default();
        mocks
            .resource
            .expect_delete_project()
            .withf(|_, name: &'_ str| name == "TCGA")
            .returning(|_, _| {
                Err(ResourceProviderError::Conflict(
                    "project TCGA still owns buckets".into(),
                ))
            });

        let (status, _) = send(mocks.admin_api(), Method::DELETE, "/projects/TCGA", None).await;

        assert_eq!(StatusCode::CONFLICT, status);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_delete() {
        let mut mocks = Mocks::default();
        mocks
            .resource
            .expect_delete_project()
            .withf(|_, name: &'_ str| name == "TCGA")
            .returning(|_, _| Ok(vec!["bob".into()]));

        let (status, body) = send(mocks.admin_api(), Method::DELETE, "/projects/TCGA", None).await;

        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"deleted_users": ["bob"]}), body);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_buckets() {
        let mut mocks = Mocks::default();
        mocks
            .resource
            .expect_list_project_buckets()
            .withf(|_, name: &'_ str| name == "TCGA")
            .returning(|_, _| {
                Ok(vec![provider_types::BucketInfo {
                    name: "b1".into(),
                    provider: "cleversafe".into(),
                }])
            });
        mocks
            .resource
            .expect_create_bucket_on_project()
            .withf(|_, name: &'_ str, req: &provider_types::BucketCreate| {
                name == "TCGA" && req.name == "b2" && req.provider == "cleversafe"
            })
            .returning(|_, _, req| {
                Ok(provider_types::Bucket {
                    id: 2,
                    name: req.name,
                    provider_id: 1,
                })
            });
        mocks
            .resource
            .expect_delete_bucket_on_project()
            .withf(|_, name: &'_ str, bucket: &'_ str| name == "TCGA" && bucket == "b1")
            .returning(|_, _, _| Ok(()));
        let api = mocks.admin_api();

        let (status, body) =
            send(api.clone(), Method::GET, "/projects/TCGA/buckets", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(
            json!({"buckets": [{"name": "b1", "provider": "cleversafe"}]}),
            body
        );

        let (status, body) = send(
            api.clone(),
            Method::POST,
            "/projects/TCGA/buckets",
            Some(json!({"name": "b2", "provider": "cleversafe"})),
        )
        .await;
        assert_eq!(StatusCode::CREATED, status);
        assert_eq!("b2", body["name"]);

        let (status, _) = send(api, Method::DELETE, "/projects/TCGA/buckets/b1", None).await;
        assert_eq!(StatusCode::NO_CONTENT, status);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_list_requires_session() {
        let mut mocks = Mocks::default();
        mocks
            .federation
            .expect_get_login_session()
            .returning(|_, _| Ok(None));
        mocks.resource.expect_list_projects().never();

        let (status, _) = send(mocks.api(), Method::GET, "/projects", None).await;

        assert_eq!(StatusCode::UNAUTHORIZED, status);
    }
}
