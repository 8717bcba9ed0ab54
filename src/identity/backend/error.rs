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

use crate::error::{BuilderError, DatabaseError};

#[derive(Error, Debug)]
pub enum IdentityDatabaseError {
    #[error("{0}")]
    UserNotFound(String),

    #[error("{0}")]
    GroupNotFound(String),

    #[error("user {0} already exists")]
    UserExists(String),

    #[error("group {0} already exists")]
    GroupExists(String),

    #[error("user {user} is not a member of group {group}")]
    MembershipNotFound { user: String, group: String },

    #[error("building identity data")]
    Builder {
        #[from]
        source: BuilderError,
    },

    /// Database error.
    #[error(transparent)]
    Database {
        #[from]
        source: DatabaseError,
    },
}
