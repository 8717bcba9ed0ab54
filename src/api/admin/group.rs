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
//! Groups, their members and projects
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
        .routes(routes!(list, create))
        .routes(routes!(show, update, remove))
        .routes(routes!(list_users))
        .routes(routes!(add_user, remove_user))
        .routes(routes!(list_projects))
        .routes(routes!(add_project, remove_project))
}

/// List groups.
#[utoipa::path(
    get,
    path = "/",
    operation_id = "/admin/group:list",
    responses(
        (status = OK, description = "List of groups", body = GroupList),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(name = "api::admin::group_list", level = "debug", skip(state), err(Debug))]
async fn list(
    AdminUser(_admin): AdminUser,
    State(state): State<ServiceState>,
) -> Result<impl IntoResponse, FenceApiError> {
    let groups = state
        .provider
        .get_identity_provider()
        .list_groups(&state)
        .await?;
    Ok(GroupList {
        groups: groups.into_iter().map(Into::into).collect(),
    })
}

/// Create group.
#[utoipa::path(
    post,
    path = "/",
    operation_id = "/admin/group:create",
    request_body = Group,
    responses(
        (status = CREATED, description = "Group", body = Group),
        (status = CONFLICT, description = "Group exists"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(name = "api::admin::group_create", level = "debug", skip(state), err(Debug))]
async fn create(
    AdminUser(_admin): AdminUser,
    State(state): State<ServiceState>,
    Json(req): Json<Group>,
) -> Result<impl IntoResponse, FenceApiError> {
    let group = state
        .provider
        .get_identity_provider()
        .create_group(&state, req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(Group::from(group))))
}

/// Show group.
#[utoipa::path(
    get,
    path = "/{name}",
    operation_id = "/admin/group:show",
    params(
      ("name" = String, Path, description = "The group name.")
    ),
    responses(
        (status = OK, description = "Group", body = Group),
        (status = NOT_FOUND, description = "Group not found"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(name = "api::admin::group_show", level = "debug", skip(state), err(Debug))]
async fn show(
    AdminUser(_admin): AdminUser,
    Path(name): Path<String>,
    State(state): State<ServiceState>,
) -> Result<impl IntoResponse, FenceApiError> {
    state
        .provider
        .get_identity_provider()
        .get_group(&state, &name)
        .await?
        .map(Group::from)
        .ok_or_else(|| FenceApiError::NotFound {
            resource: "group".into(),
            identifier: name,
        })
}

/// Update group description.
#[utoipa::path(
    put,
    path = "/{name}",
    operation_id = "/admin/group:update",
    params(
      ("name" = String, Path, description = "The group name.")
    ),
    request_body = GroupUpdateRequest,
    responses(
        (status = OK, description = "Group", body = Group),
        (status = NOT_FOUND, description = "Group not found"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(name = "api::admin::group_update", level = "debug", skip(state), err(Debug))]
async fn update(
    AdminUser(_admin): AdminUser,
    Path(name): Path<String>,
    State(state): State<ServiceState>,
    Json(req): Json<GroupUpdateRequest>,
) -> Result<impl IntoResponse, FenceApiError> {
    let group = state
        .provider
        .get_identity_provider()
        .update_group(&state, &name, req.into())
        .await?;
    Ok(Group::from(group))
}

/// Delete group.
///
/// Memberships and project access of the group are removed as well.
#[utoipa::path(
    delete,
    path = "/{name}",
    operation_id = "/admin/group:delete",
    params(
      ("name" = String, Path, description = "The group name.")
    ),
    responses(
        (status = NO_CONTENT, description = "Deleted"),
        (status = NOT_FOUND, description = "Group not found"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(name = "api::admin::group_delete", level = "debug", skip(state), err(Debug))]
async fn remove(
    AdminUser(_admin): AdminUser,
    Path(name): Path<String>,
    State(state): State<ServiceState>,
) -> Result<impl IntoResponse, FenceApiError> {
    state
        .provider
        .get_identity_provider()
        .delete_group(&state, &name)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List group members.
#[utoipa::path(
    get,
    path = "/{name}/users",
    operation_id = "/admin/group/user:list",
    params(
      ("name" = String, Path, description = "The group name.")
    ),
    responses(
        (status = OK, description = "Members of the group", body = UserList),
        (status = NOT_FOUND, description = "Group not found"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(name = "api::admin::group_user_list", level = "debug", skip(state), err(Debug))]
async fn list_users(
    AdminUser(_admin): AdminUser,
    Path(name): Path<String>,
    State(state): State<ServiceState>,
) -> Result<impl IntoResponse, FenceApiError> {
    let users = state
        .provider
        .get_identity_provider()
        .list_group_users(&state, &name)
        .await?;
    Ok(UserList {
        users: users.into_iter().map(Into::into).collect(),
    })
}

/// Add user to group.
#[utoipa::path(
    put,
    path = "/{name}/users/{username}",
    operation_id = "/admin/group/user:add",
    params(
      ("name" = String, Path, description = "The group name."),
      ("username" = String, Path, description = "The user name."),
    ),
    responses(
        (status = NO_CONTENT, description = "Added"),
        (status = NOT_FOUND, description = "User or group not found"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(name = "api::admin::group_user_add", level = "debug", skip(state), err(Debug))]
async fn add_user(
    AdminUser(_admin): AdminUser,
    Path((name, username)): Path<(String, String)>,
    State(state): State<ServiceState>,
) -> Result<impl IntoResponse, FenceApiError> {
    state
        .provider
        .get_identity_provider()
        .add_user_to_group(&state, &username, &name)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Remove user from group.
#[utoipa::path(
    delete,
    path = "/{name}/users/{username}",
    operation_id = "/admin/group/user:remove",
    params(
      ("name" = String, Path, description = "The group name."),
      ("username" = String, Path, description = "The user name."),
    ),
    responses(
        (status = NO_CONTENT, description = "Removed"),
        (status = NOT_FOUND, description = "User is not a member of the group"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(name = "api::admin::group_user_remove", level = "debug", skip(state), err(Debug))]
async fn remove_user(
    AdminUser(_admin): AdminUser,
    Path((name, username)): Path<(String, String)>,
    State(state): State<ServiceState>,
) -> Result<impl IntoResponse, FenceApiError> {
    state
        .provider
        .get_identity_provider()
        .remove_user_from_group(&state, &username, &name)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List projects of group.
#[utoipa::path(
    get,
    path = "/{name}/projects",
    operation_id = "/admin/group/project:list",
    params(
      ("name" = String, Path, description = "The group name.")
    ),
    responses(
        (status = OK, description = "Names of the projects", body = ProjectNameList),
        (status = NOT_FOUND, description = "Group not found"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(
    name = "api::admin::group_project_list",
    level = "debug",
    skip(state),
    err(Debug)
)]
async fn list_projects(
    AdminUser(_admin): AdminUser,
    Path(name): Path<String>,
    State(state): State<ServiceState>,
) -> Result<impl IntoResponse, FenceApiError> {
    let projects = state
        .provider
        .get_assignment_provider()
        .list_group_projects(&state, &name)
        .await?;
    Ok(ProjectNameList { projects })
}

/// Connect project to group.
///
/// Privileges of an already connected project are replaced.
#[utoipa::path(
    put,
    path = "/{name}/projects/{project}",
    operation_id = "/admin/group/project:add",
    params(
      ("name" = String, Path, description = "The group name."),
      ("project" = String, Path, description = "The project name."),
    ),
    request_body = GroupProjectRequest,
    responses(
        (status = OK, description = "Privileges of the group", body = AccessPrivilege),
        (status = NOT_FOUND, description = "Group or project not found"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(name = "api::admin::group_project_add", level = "debug", skip(state), err(Debug))]
async fn add_project(
    AdminUser(_admin): AdminUser,
    Path((name, project)): Path<(String, String)>,
    State(state): State<ServiceState>,
    Json(req): Json<GroupProjectRequest>,
) -> Result<impl IntoResponse, FenceApiError> {
    let privilege = state
        .provider
        .get_assignment_provider()
        .add_project_to_group(&state, &name, &project, req.privilege)
        .await?;
    Ok(AccessPrivilege::from(privilege))
}

/// Disconnect project from group.
#[utoipa::path(
    delete,
    path = "/{name}/projects/{project}",
    operation_id = "/admin/group/project:remove",
    params(
      ("name" = String, Path, description = "The group name."),
      ("project" = String, Path, description = "The project name."),
    ),
    responses(
        (status = NO_CONTENT, description = "Removed"),
        (status = NOT_FOUND, description = "Project and group are not linked"),
    ),
    security(("session" = [])),
    tag="admin"
)]
#[tracing::instrument(
    name = "api::admin::group_project_remove",
    level = "debug",
    skip(state),
    err(Debug)
)]
async fn remove_project(
    AdminUser(_admin): AdminUser,
    Path((name, project)): Path<(String, String)>,
    State(state): State<ServiceState>,
) -> Result<impl IntoResponse, FenceApiError> {
    state
        .provider
        .get_assignment_provider()
        .remove_project_from_group(&state, &name, &project)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use tracing_test::traced_test;

    use super::super::tests::{Mocks, send};
    use crate::assignment::error::AssignmentProviderError;
    use crate::assignment::types as assignment_types;
    use crate::identity::error::IdentityProviderError;
    use crate::identity::types as identity_types;

    #[tokio::test]
    #[traced_test]
    async fn test_list_and_create() {
        let mut mocks = Mocks::default();
        mocks.identity.expect_list_groups().returning(|_| {
            Ok(vec![identity_types::Group {
                id: 1,
                name: "admins".into(),
                description: Some("Administrators".into()),
            }])
        });
        mocks
            .identity
            .expect_create_group()
            .withf(|_, req: &identity_types::GroupCreate| req.name == "readers")
            .returning(|_, req| {
                Ok(identity_types::Group {
                    id: 2,
                    name: req.name,
                    description: req.description,
                })
            });
        let api = mocks.admin_api();

        let (status, body) = send(api.clone(), Method::GET, "/groups", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(
            json!({"groups": [{"name": "admins", "description": "Administrators"}]}),
            body
        );

        let (status, body) = send(
            api,
            Method::POST,
            "/groups",
            Some(json!({"name": "readers"})),
        )
        .await;
        assert_eq!(StatusCode::CREATED, status);
        assert_eq!("readers", body["name"]);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_update() {
        let mut mocks = Mocks::default();
        mocks
            .identity
            .expect_update_group()
            .withf(|_, name: &'_ str, req: &identity_types::GroupUpdate| {
                name == "admins" && req.description.as_deref() == Some("Operators")
            })
            .returning(|_, name, req| {
                Ok(identity_types::Group {
                    id: 1,
                    name: name.to_string(),
                    description: req.description,
                })
            });
        let api = mocks.admin_api();

        let (status, body) = send(
            api,
            Method::PUT,
            "/groups/admins",
            Some(json!({"description": "Operators"})),
        )
        .await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"name": "admins", "description": "Operators"}), body);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_update_missing() {
        let mut mocks = Mocks::default();
        mocks
            .identity
            .expect_update_group()
            .returning(|_, name, _| Err(IdentityProviderError::GroupNotFound(name.to_string())));
        let api = mocks.admin_api();

        let (status, _) = send(
            api,
            Method::PUT,
            "/groups/ghost",
            Some(json!({"description": "Nobody"})),
        )
        .await;
        assert_eq!(StatusCode::NOT_FOUND, status);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_create_conflict() {
        let mut mocks = Mocks::default();
        mocks.identity.expect_create_group().returning(|_, _| {
            Err(IdentityProviderError::Conflict(
                "group admins already exists".into(),
            ))
        });

        let (status, _) = send(
            mocks.admin_api(),
            Method::POST,
            "/groups",
            Some(json!({"name": "admins"})),
        )
        .await;

        assert_eq!(StatusCode::CONFLICT, status);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_show_and_delete() {
        let mut mocks = Mocks::default();
        mocks
            .identity
            .expect_get_group()
            .withf(|_, name: &'_ str| name == "readers")
            .returning(|_, _| {
                Ok(Some(identity_types::Group {
                    id: 2,
                    name: "readers".into(),
                    description: None,
                }))
            });
        mocks
            .identity
            .expect_delete_group()
            .withf(|_, name: &'_ str| name == "readers")
            .returning(|_, _| Ok(()));
        let api = mocks.admin_api();

        let (status, body) = send(api.clone(), Method::GET, "/groups/readers", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!("readers", body["name"]);

        let (status, _) = send(api, Method::DELETE, "/groups/readers", None).await;
        assert_eq!(StatusCode::NO_CONTENT, status);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_members() {
        let mut mocks = Mocks::default();
        mocks
            .identity
            .expect_list_group_users()
            .withf(|_, name: &'_ str| name == "readers")
            .returning(|_, _| {
                Ok(vec![identity_types::User {
                    id: 3,
                    username: "bob".into(),
                    active: true,
                    ..Default::default()
                }])
            });
        mocks
            .identity
            .expect_add_user_to_group()
            .withf(|_, username: &'_ str, group: &'_ str| username == "bob" && group == "readers")
            .returning(|_, _, _| Ok(()));
        mocks
            .identity
            .expect_remove_user_from_group()
            .withf(|_, username: &'_ str, group: &'_ str| username == "eve" && group == "readers")
            .returning(|_, username, group| {
                Err(IdentityProviderError::MembershipNotFound {
                    user: username.into(),
                    group: group.into(),
                })
            });
        let api = mocks.admin_api();

        let (status, body) = send(api.clone(), Method::GET, "/groups/readers/users", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!("bob", body["users"][0]["username"]);

        let (status, _) = send(api.clone(), Method::PUT, "/groups/readers/users/bob", None).await;
        assert_eq!(StatusCode::NO_CONTENT, status);

        let (status, _) = send(api, Method::DELETE, "/groups/readers/users/eve", None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_projects() {
        let mut mocks = Mocks::default();
        mocks
            .assignment
            .expect_list_group_projects()
            .withf(|_, name: &'_ str| name == "readers")
            .returning(|_, _| Ok(vec!["TCGA".into()]));
        mocks
            .assignment
            .expect_add_project_to_group()
            .withf(|_, group: &'_ str, project: &'_ str, privilege: &Vec<String>| {
                group == "readers" && project == "TCGA" && *privilege == vec!["read".to_string()]
            })
            .returning(|_, _, _, privilege| {
                Ok(assignment_types::AccessPrivilege {
                    id: 1,
                    user_id: None,
                    group_id: Some(2),
                    project_id: 1,
                    privilege,
                })
            });
        mocks
            .assignment
            .expect_remove_project_from_group()
            .returning(|_, group, project| {
                Err(AssignmentProviderError::GrantNotFound(format!(
                    "project {project} and group {group} are not linked"
                )))
            });
        let api = mocks.admin_api();

        let (status, body) =
            send(api.clone(), Method::GET, "/groups/readers/projects", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"projects": ["TCGA"]}), body);

        let (status, body) = send(
            api.clone(),
            Method::PUT,
            "/groups/readers/projects/TCGA",
            Some(json!({"privilege": ["read"]})),
        )
        .await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"privilege": ["read"]}), body);

        let (status, _) = send(api, Method::DELETE, "/groups/readers/projects/CCLE", None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
    }
}
