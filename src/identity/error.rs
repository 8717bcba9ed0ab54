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

use thiserror::Error;

use crate::identity::backend::error::*;

#[derive(Error, Debug)]
pub enum IdentityProviderError {
    /// Unsupported driver
    #[error("unsupported driver {0}")]
    UnsupportedDriver(String),

    #[error("user {0} not found")]
    UserNotFound(String),

    #[error("group {0} not found")]
    GroupNotFound(String),

    #[error("user {user} and group {group} are not linked")]
    MembershipNotFound { user: String, group: String },

    /// Identity backend error
    #[error(transparent)]
    IdentityDatabase { source: IdentityDatabaseError },

    /// Conflict.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Request validation error.
    #[error("request validation error: {}", source)]
    Validation {
        /// The source of the error.
        #[from]
        source: validator::ValidationErrors,
    },
}

impl From<IdentityDatabaseError> for IdentityProviderError {
    fn from(source: IdentityDatabaseError) -> Self {
        match source {
            IdentityDatabaseError::Database { source } => match source {
                cfl @ crate::error::DatabaseError::Conflict { .. } => {
                    Self::Conflict(cfl.to_string())
                }
                other => Self::IdentityDatabase {
                    source: IdentityDatabaseError::Database { source: other },
                },
            },
            IdentityDatabaseError::UserNotFound(x) => Self::UserNotFound(x),
            IdentityDatabaseError::GroupNotFound(x) => Self::GroupNotFound(x),
            cfl @ IdentityDatabaseError::UserExists(..) => Self::Conflict(cfl.to_string()),
            cfl @ IdentityDatabaseError::GroupExists(..) => Self::Conflict(cfl.to_string()),
            IdentityDatabaseError::MembershipNotFound { user, group } => {
                Self::MembershipNotFound { user, group }
            }
            _ => Self::IdentityDatabase { source },
        }
    }
}
