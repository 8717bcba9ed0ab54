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
//! Users and their project access
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
use crate::assignment::AssignmentApi;
use crate::fence::ServiceState;
use crate::identity::IdentityApi;

pub(super) fn openapi_router() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new()
        .routes(routes!(list))
        .routes(routes!(show, remove))
        .routes(routes!(list_groups))
        .routes(routes!(grant_project))
        .routes(routes!(revoke_project))
}

/// List users.
#[utoipa::path(
    get,
    path = "/",
    operation_id = "/admin/user:list",
    responses(
        (status = OK, description = "List of users", body = UserList),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(name = "api::admin::user_list", level = "debug", skip(state), err(Debug))]
async fn list(
    AdminUser(_admin): AdminUser,
    State(state): State<ServiceState>,
) -> Result<impl IntoResponse, FenceApiError> {
    let users = state
        .provider
        .get_identity_provider()
        .list_users(&state)
        .await?;
    Ok(UserList {
        users: users.into_iter().map(Into::into).collect(),
    })
}

/// Show user.
///
/// Returns the user together with the names of its groups and the projects
/// it has direct access to.
#[utoipa::path(
    get,
    path = "/{username}",
    operation_id = "/admin/user:show",
    params(
      ("username" = String, Path, description = "The user name.")
    ),
    responses(
        (status = OK, description = "User", body = UserResponse),
        (status = NOT_FOUND, description = "User not found"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(name = "api::admin::user_show", level = "debug", skip(state), err(Debug))]
async fn show(
    AdminUser(_admin): AdminUser,
    Path(username): Path<String>,
    State(state): State<ServiceState>,
) -> Result<impl IntoResponse, FenceApiError> {
    let identity = state.provider.get_identity_provider();
    let user = identity
        .get_user(&state, &username)
        .await?
        .ok_or_else(|| FenceApiError::NotFound {
            resource: "user".into(),
            identifier: username.clone(),
        })?;
    let groups = identity.list_user_groups(&state, &username).await?;
    let project_access = state
        .provider
        .get_assignment_provider()
        .list_user_projects(&state, &username)
        .await?;

    Ok(UserResponse {
        user: user.into(),
        groups: groups.into_iter().map(|group| group.name).collect(),
        project_access: project_access.into_iter().map(Into::into).collect(),
    })
}

/// Delete user.
///
/// Group memberships and access privileges of the user are deleted as well.
#[utoipa::path(
    delete,
    path = "/{username}",
    operation_id = "/admin/user:delete",
    params(
      ("username" = String, Path, description = "The user name.")
    ),
    responses(
        (status = NO_CONTENT, description = "Deleted"),
        (status = NOT_FOUND, description = "User not found"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(name = "api::admin::user_delete", level = "debug", skip(state), err(Debug))]
async fn remove(
    AdminUser(_admin): AdminUser,
    Path(username): Path<String>,
    State(state): State<ServiceState>,
) -> Result<impl IntoResponse, FenceApiError> {
    state
        .provider
        .get_identity_provider()
        .delete_user(&state, &username)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List groups of user.
#[utoipa::path(
    get,
    path = "/{username}/groups",
    operation_id = "/admin/user/group:list",
    params(
      ("username" = String, Path, description = "The user name.")
    ),
    responses(
        (status = OK, description = "Names of the groups", body = GroupNameList),
        (status = NOT_FOUND, description = "User not found"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(name = "api::admin::user_group_list", level = "debug", skip(state), err(Debug))]
async fn list_groups(
    AdminUser(_admin): AdminUser,
    Path(username): Path<String>,
    State(state): State<ServiceState>,
) -> Result<impl IntoResponse, FenceApiError> {
    let groups = state
        .provider
        .get_identity_provider()
        .list_user_groups(&state, &username)
        .await?;
    Ok(GroupNameList {
        groups: groups.into_iter().map(|group| group.name).collect(),
    })
}

/// Grant user privileges on project.
///
/// The project is identified by the `auth_id`. Existing privileges of the
/// user on the project are replaced.
#[utoipa::path(
    put,
    path = "/{username}/projects",
    operation_id = "/admin/user/project:grant",
    params(
      ("username" = String, Path, description = "The user name.")
    ),
    request_body = UserProjectGrantRequest,
    responses(
        (status = OK, description = "Privileges of the user", body = AccessPrivilege),
        (status = NOT_FOUND, description = "User or project not found"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(
    name = "api::admin::user_project_grant",
    level = "debug",
    skip(state),
    err(Debug)
)]
async fn grant_project(
    AdminUser(_admin): AdminUser,
    Path(username): Path<String>,
    State(state): State<ServiceState>,
    Json(req): Json<UserProjectGrantRequest>,
) -> Result<impl IntoResponse, FenceApiError> {
    let privilege = state
        .provider
        .get_assignment_provider()
        .grant_user_project(&state, &username, req.into())
        .await?;
    Ok(AccessPrivilege::from(privilege))
}

/// Revoke user access to project.
#[utoipa::path(
    delete,
    path = "/{username}/projects/{project}",
    operation_id = "/admin/user/project:revoke",
    params(
      ("username" = String, Path, description = "The user name."),
      ("project" = String, Path, description = "The project name."),
    ),
    responses(
        (status = NO_CONTENT, description = "Revoked"),
        (status = NOT_FOUND, description = "User and project are not linked"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(
    name = "api::admin::user_project_revoke",
    level = "debug",
    skip(state),
    err(Debug)
)]
async fn revoke_project(
    AdminUser(_admin): AdminUser,
    Path((username, project)): Path<(String, String)>,
    State(state): State<ServiceState>,
) -> Result<impl IntoResponse, FenceApiError> {
    state
        .provider
        .get_assignment_provider()
        .revoke_user_project(&state, &username, &project)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use chrono::{TimeDelta, Utc};
    use serde_json::json;
    use tracing_test::traced_test;

    use super::super::tests::{Mocks, send};
    use crate::assignment::types as assignment_types;
    use crate::federation::types::LoginSession;
    use crate::identity::error::IdentityProviderError;
    use crate::identity::types as identity_types;
    use crate::tests::api::{SESSION_ID, authenticated_session};

    fn alice() -> identity_types::User {
        identity_types::User {
            id: 2,
            username: "alice".into(),
            email: Some("alice@example.org".into()),
            identity_provider: Some("fence".into()),
            active: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    #[traced_test]
    async fn test_list() {
        let mut mocks = Mocks::default();
        mocks
            .identity
            .expect_list_users()
            .returning(|_| Ok(vec![alice()]));

        let (status, body) = send(mocks.admin_api(), Method::GET, "/users", None).await;

        assert_eq!(StatusCode::OK, status);
        assert_eq!(
            json!({"users": [{
                "username": "alice",
                "email": "alice@example.org",
                "is_admin": false,
                "identity_provider": "fence",
                "active": true
            }]}),
            body
        );
    }

    #[tokio::test]
    #[traced_test]
    async fn test_show() {
        let mut mocks = Mocks::default();
        mocks
            .identity
            .expect_get_user()
            .withf(|_, username: &'_ str| username == "alice")
            .returning(|_, _| Ok(Some(alice())));
        mocks
            .identity
            .expect_list_user_groups()
            .withf(|_, username: &'_ str| username == "alice")
            .returning(|_, _| {
                Ok(vec![identity_types::Group {
                    id: 1,
                    name: "readers".into(),
                    description: None,
                }])
            });
        mocks
            .assignment
            .expect_list_user_projects()
            .withf(|_, username: &'_ str| username == "alice")
            .returning(|_, _| {
                Ok(vec![assignment_types::ProjectAccess {
                    project: "TCGA".into(),
                    auth_id: "phs000178".into(),
                    privilege: vec!["read".into()],
                }])
            });

        let (status, body) = send(mocks.admin_api(), Method::GET, "/users/alice", None).await;

        assert_eq!(StatusCode::OK, status);
        assert_eq!("alice", body["username"]);
        assert_eq!(json!(["readers"]), body["groups"]);
        assert_eq!(
            json!([{"project": "TCGA", "auth_id": "phs000178", "privilege": ["read"]}]),
            body["project_access"]
        );
    }

    #[tokio::test]
    #[traced_test]
    async fn test_show_not_found() {
        let mut mocks = Mocks::default();
        mocks
            .identity
            .expect_get_user()
            .withf(|_, username: &'_ str| username == "nobody")
            .returning(|_, _| Ok(None));
        mocks.assignment.expect_list_user_projects().never();

        let (status, _) = send(mocks.admin_api(), Method::GET, "/users/nobody", None).await;

        assert_eq!(StatusCode::NOT_FOUND, status);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_delete_and_groups() {
        let mut mocks = Mocks::default();
        mocks
            .identity
            .expect_delete_user()
            .withf(|_, username: &'_ str| username == "alice")
            .returning(|_, _| Ok(()));
        mocks
            .identity
            .expect_delete_user()
            .withf(|_, username: &'_ str| username == "nobody")
            .returning(|_, username| Err(IdentityProviderError::UserNotFound(username.into())));
        mocks
            .identity
            .expect_list_user_groups()
            .withf(|_, username: &'_ str| username == "alice")
            .returning(|_, _| {
                Ok(vec![identity_types::Group {
                    id: 1,
                    name: "readers".into(),
                    description: None,
                }])
            });
        let api = mocks.admin_api();

        let (status, body) = send(api.clone(), Method::GET, "/users/alice/groups", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"groups": ["readers"]}), body);

        let (status, _) = send(api.clone(), Method::DELETE, "/users/alice", None).await;
        assert_eq!(StatusCode::NO_CONTENT, status);

        let (status, _) = send(api, Method::DELETE, "/users/nobody", None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_grant_and_revoke() {
        let mut mocks = Mocks::default();
        mocks
            .assignment
            .expect_grant_user_project()
            .withf(|_, username: &'_ str, grant: &assignment_types::UserProjectGrant| {
                username == "alice" && grant.auth_id == "phs000178"
            })
            .returning(|_, _, grant| {
                Ok(assignment_types::AccessPrivilege {
                    id: 1,
                    user_id: Some(2),
                    group_id: None,
                    project_id: 1,
                    privilege: grant.privilege,
                })
            });
        mocks
            .assignment
            .expect_revoke_user_project()
            .withf(|_, username: &'_ str, project: &'_ str| username == "alice" && project == "TCGA")
            .returning(|_, _, _| Ok(()));
        let api = mocks.admin_api();

        let (status, body) = send(
            api.clone(),
            Method::PUT,
            "/users/alice/projects",
            Some(json!({"auth_id": "phs000178", "privilege": ["read", "write"]})),
        )
        .await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"privilege": ["read", "write"]}), body);

        let (status, _) = send(api, Method::DELETE, "/users/alice/projects/TCGA", None).await;
        assert_eq!(StatusCode::NO_CONTENT, status);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_non_admin_forbidden() {
        let mut mocks = Mocks::default();
        mocks
            .federation
            .expect_get_login_session()
            .withf(|_, id: &'_ str| id == SESSION_ID)
            .returning(|_, _| Ok(Some(authenticated_session("alice"))));
        mocks
            .identity
            .expect_get_user()
            .withf(|_, username: &'_ str| username == "alice")
            .returning(|_, _| Ok(Some(alice())));
        mocks.identity.expect_list_users().never();

        let (status, body) = send(mocks.api(), Method::GET, "/users", None).await;

        assert_eq!(StatusCode::FORBIDDEN, status);
        assert_eq!(403, body["error"]["code"]);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_anonymous_session_unauthorized() {
        let mut mocks = Mocks::default();
        mocks.federation.expect_get_login_session().returning(|_, _| {
            Ok(Some(LoginSession {
                id: SESSION_ID.into(),
                state: Some("xyz".into()),
                redirect: None,
                username: None,
                provider: None,
                expires_at: Utc::now() + TimeDelta::hours(1),
            }))
        });

        let (status, _) = send(mocks.api(), Method::GET, "/users", None).await;

        assert_eq!(StatusCode::UNAUTHORIZED, status);
    }
}
