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

use crate::assignment::backend::error::*;

#[derive(Error, Debug)]
pub enum AssignmentProviderError {
    /// Unsupported driver
    #[error("unsupported driver {0}")]
    UnsupportedDriver(String),

    /// Conflict.
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("user {0} not found")]
    UserNotFound(String),

    #[error("group {0} not found")]
    GroupNotFound(String),

    #[error("project {0} not found")]
    ProjectNotFound(String),

    /// The user or group has no access to the project.
    #[error("{0}")]
    GrantNotFound(String),

    /// Assignment backend error
    #[error(transparent)]
    AssignmentDatabaseError { source: AssignmentDatabaseError },

    #[error("request validation error: {}", source)]
    Validation {
        /// The source of the error.
        #[from]
        source: validator::ValidationErrors,
    },
}

impl From<AssignmentDatabaseError> for AssignmentProviderError {
    fn from(source: AssignmentDatabaseError) -> Self {
        match source {
            AssignmentDatabaseError::Database { source } => match source {
                cfl @ crate::error::DatabaseError::Conflict { .. } => {
                    Self::Conflict(cfl.to_string())
                }
                other => Self::AssignmentDatabaseError {
                    source: AssignmentDatabaseError::Database { source: other },
                },
            },
            AssignmentDatabaseError::UserNotFound(x) => Self::UserNotFound(x),
            AssignmentDatabaseError::GroupNotFound(x) => Self::GroupNotFound(x),
            AssignmentDatabaseError::ProjectNotFound(x) => Self::ProjectNotFound(x),
            nf @ (AssignmentDatabaseError::UserProjectNotLinked { .. }
            | AssignmentDatabaseError::GroupProjectNotLinked { .. }) => {
                Self::GrantNotFound(nf.to_string())
            }
            _ => Self::AssignmentDatabaseError { source },
        }
    }
}
