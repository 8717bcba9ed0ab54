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
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LoginSession::Table)
                    .if_not_exists()
                    .col(string_len(LoginSession::Id, 64).primary_key())
                    .col(string_len_null(LoginSession::State, 255))
                    .col(text_null(LoginSession::Redirect))
                    .col(string_len_null(LoginSession::Username, 255))
                    .col(string_len_null(LoginSession::Provider, 255))
                    .col(date_time(LoginSession::ExpiresAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-login-session-expires-at")
                    .table(LoginSession::Table)
                    .col(LoginSession::ExpiresAt)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LoginSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LoginSession {
    Table,
    Id,
    State,
    Redirect,
    Username,
    Provider,
    ExpiresAt,
}
