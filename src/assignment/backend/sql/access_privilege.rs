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

use sea_orm::entity::prelude::Json;

use crate::assignment::backend::error::AssignmentDatabaseError;
use crate::assignment::types::*;
use crate::db::entity::access_privilege as db_access_privilege;

/// Decode the privilege list stored as json. Missing value is an empty list.
pub(super) fn privilege_from_json(
    value: Option<Json>,
) -> Result<Vec<String>, AssignmentDatabaseError> {
    Ok(match value {
        Some(val) => serde_json::from_value(val)?,
        None => Vec::new(),
    })
}

impl TryFrom<db_access_privilege::Model> for AccessPrivilege {
    type Error = AssignmentDatabaseError;

    fn try_from(value: db_access_privilege::Model) -> Result<Self, Self::Error> {
        let mut builder = AccessPrivilegeBuilder::default();
        builder.id(value.id);
        builder.project_id(value.project_id);
        if let Some(val) = value.user_id {
            builder.user_id(val);
        }
        if let Some(val) = value.group_id {
            builder.group_id(val);
        }
        builder.privilege(privilege_from_json(value.privilege)?);
        Ok(builder.build()?)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use serde_json::json;

    use super::*;
    use crate::db::entity::{group as db_group, project as db_project, user as db_user};

    pub fn get_user_privilege_mock(
        id: i32,
        user_id: i32,
        project_id: i32,
    ) -> db_access_privilege::Model {
        db_access_privilege::Model {
            id,
            user_id: Some(user_id),
            group_id: None,
            project_id,
            privilege: Some(json!(["read", "write"])),
        }
    }

    pub fn get_group_privilege_mock(
        id: i32,
        group_id: i32,
        project_id: i32,
    ) -> db_access_privilege::Model {
        db_access_privilege::Model {
            id,
            user_id: None,
            group_id: Some(group_id),
            project_id,
            privilege: None,
        }
    }

    pub fn get_user_mock<S: AsRef<str>>(id: i32, username: S) -> db_user::Model {
        db_user::Model {
            id,
            username: username.as_ref().to_string(),
            email: None,
            is_admin: false,
            identity_provider: Some("fence".into()),
            active: true,
        }
    }

    pub fn get_group_mock<S: AsRef<str>>(id: i32, name: S) -> db_group::Model {
        db_group::Model {
            id,
            name: name.as_ref().to_string(),
            description: None,
        }
    }

    pub fn get_project_mock<S: AsRef<str>>(id: i32, name: S) -> db_project::Model {
        db_project::Model {
            id,
            name: name.as_ref().to_string(),
            auth_id: format!("phs{id:06}"),
            description: None,
        }
    }

    #[test]
    fn test_from_model() {
        let privilege = AccessPrivilege::try_from(get_user_privilege_mock(1, 2, 3)).unwrap();
        assert_eq!(Some(2), privilege.user_id);
        assert_eq!(None, privilege.group_id);
        assert_eq!(vec!["read", "write"], privilege.privilege);

        let privilege = AccessPrivilege::try_from(get_group_privilege_mock(1, 2, 3)).unwrap();
        assert_eq!(Some(2), privilege.group_id);
        assert!(privilege.privilege.is_empty());
    }

    #[test]
    fn test_from_corrupted_model() {
        let mut model = get_user_privilege_mock(1, 2, 3);
        model.privilege = Some(json!({"read": true}));
        assert!(matches!(
            AccessPrivilege::try_from(model),
            Err(AssignmentDatabaseError::Serde { .. })
        ));
    }
}
