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
#![allow(clippy::enum_variant_names)]
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_len_uniq(User::Username, 255))
                    .col(string_len_null(User::Email, 255))
                    .col(boolean(User::IsAdmin).default(false))
                    .col(string_len_null(User::IdentityProvider, 255))
                    .col(boolean(User::Active).default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Group::Table)
                    .if_not_exists()
                    .col(pk_auto(Group::Id))
                    .col(string_len_uniq(Group::Name, 255))
                    .col(text_null(Group::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserToGroup::Table)
                    .if_not_exists()
                    .col(integer(UserToGroup::UserId))
                    .col(integer(UserToGroup::GroupId))
                    .primary_key(
                        Index::create()
                            .col(UserToGroup::UserId)
                            .col(UserToGroup::GroupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user-to-group-user")
                            .from(UserToGroup::Table, UserToGroup::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user-to-group-group")
                            .from(UserToGroup::Table, UserToGroup::GroupId)
                            .to(Group::Table, Group::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(pk_auto(Project::Id))
                    .col(string_len_uniq(Project::Name, 255))
                    .col(string_len_uniq(Project::AuthId, 255))
                    .col(text_null(Project::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CloudProvider::Table)
                    .if_not_exists()
                    .col(pk_auto(CloudProvider::Id))
                    .col(string_len_uniq(CloudProvider::Name, 255))
                    .col(string_len_null(CloudProvider::Endpoint, 255))
                    .col(string_len_null(CloudProvider::Backend, 255))
                    .col(string_len_null(CloudProvider::Service, 255))
                    .col(text_null(CloudProvider::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Bucket::Table)
                    .if_not_exists()
                    .col(pk_auto(Bucket::Id))
                    .col(string_len(Bucket::Name, 255))
                    .col(integer(Bucket::ProviderId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-bucket-cloud-provider")
                            .from(Bucket::Table, Bucket::ProviderId)
                            .to(CloudProvider::Table, CloudProvider::Id),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx-bucket-name-provider")
                            .col(Bucket::Name)
                            .col(Bucket::ProviderId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StorageAccess::Table)
                    .if_not_exists()
                    .col(pk_auto(StorageAccess::Id))
                    .col(integer(StorageAccess::ProjectId))
                    .col(integer(StorageAccess::ProviderId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-storage-access-project")
                            .from(StorageAccess::Table, StorageAccess::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-storage-access-cloud-provider")
                            .from(StorageAccess::Table, StorageAccess::ProviderId)
                            .to(CloudProvider::Table, CloudProvider::Id),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx-storage-access-project-provider")
                            .col(StorageAccess::ProjectId)
                            .col(StorageAccess::ProviderId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProjectToBucket::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectToBucket::Id))
                    .col(integer(ProjectToBucket::ProjectId))
                    .col(integer(ProjectToBucket::BucketId))
                    .col(json_null(ProjectToBucket::Privilege))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-project-to-bucket-project")
                            .from(ProjectToBucket::Table, ProjectToBucket::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-project-to-bucket-bucket")
                            .from(ProjectToBucket::Table, ProjectToBucket::BucketId)
                            .to(Bucket::Table, Bucket::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AccessPrivilege::Table)
                    .if_not_exists()
                    .col(pk_auto(AccessPrivilege::Id))
                    .col(integer_null(AccessPrivilege::UserId))
                    .col(integer_null(AccessPrivilege::GroupId))
                    .col(integer(AccessPrivilege::ProjectId))
                    .col(json_null(AccessPrivilege::Privilege))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-access-privilege-user")
                            .from(AccessPrivilege::Table, AccessPrivilege::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-access-privilege-group")
                            .from(AccessPrivilege::Table, AccessPrivilege::GroupId)
                            .to(Group::Table, Group::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-access-privilege-project")
                            .from(AccessPrivilege::Table, AccessPrivilege::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx-access-privilege-user-project")
                            .col(AccessPrivilege::UserId)
                            .col(AccessPrivilege::ProjectId),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx-access-privilege-group-project")
                            .col(AccessPrivilege::GroupId)
                            .col(AccessPrivilege::ProjectId),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccessPrivilege::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectToBucket::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StorageAccess::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Bucket::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CloudProvider::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserToGroup::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Group::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Username,
    Email,
    IsAdmin,
    IdentityProvider,
    Active,
}

#[derive(DeriveIden)]
enum Group {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum UserToGroup {
    Table,
    UserId,
    GroupId,
}

#[derive(DeriveIden)]
enum Project {
    Table,
    Id,
    Name,
    AuthId,
    Description,
}

#[derive(DeriveIden)]
enum CloudProvider {
    Table,
    Id,
    Name,
    Endpoint,
    Backend,
    Service,
    Description,
}

#[derive(DeriveIden)]
enum Bucket {
    Table,
    Id,
    Name,
    ProviderId,
}

#[derive(DeriveIden)]
enum StorageAccess {
    Table,
    Id,
    ProjectId,
    ProviderId,
}

#[derive(DeriveIden)]
enum ProjectToBucket {
    Table,
    Id,
    ProjectId,
    BucketId,
    Privilege,
}

#[derive(DeriveIden)]
enum AccessPrivilege {
    Table,
    Id,
    UserId,
    GroupId,
    ProjectId,
    Privilege,
}
