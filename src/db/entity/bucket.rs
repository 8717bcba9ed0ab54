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
#[sea_orm(table_name = "bucket")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub provider_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cloud_provider::Entity",
        from = "Column::ProviderId",
        to = "super::cloud_provider::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    CloudProvider,
    #[sea_orm(has_many = "super::project_to_bucket::Entity")]
    ProjectToBucket,
}

impl Related<super::cloud_provider::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CloudProvider.def()
    }
}

impl Related<super::project_to_bucket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectToBucket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
