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

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub email: Option<String>,
    pub is_admin: bool,
    pub identity_provider: Option<String>,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::access_privilege::Entity")]
    AccessPrivilege,
    #[sea_orm(has_many = "super::user_to_group::Entity")]
    UserToGroup,
}

impl Related<super::access_privilege::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccessPrivilege.def()
    }
}

impl Related<super::user_to_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserToGroup.def()
    }
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_to_group::Relation::Group.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::user_to_group::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
