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
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub auth_id: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::access_privilege::Entity")]
    AccessPrivilege,
    #[sea_orm(has_many = "super::project_to_bucket::Entity")]
    ProjectToBucket,
    #[sea_orm(has_many = "super::storage_access::Entity")]
    StorageAccess,
}

impl Related<super::access_privilege::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccessPrivilege.def()
    }
}

impl Related<super::project_to_bucket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectToBucket.def()
    }
}

impl Related<super::storage_access::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StorageAccess.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
