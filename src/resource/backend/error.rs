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
pub enum ResourceDatabaseError {
    #[error("{0}")]
    ProjectNotFound(String),

    #[error("{0}")]
    CloudProviderNotFound(String),

    #[error("{0}")]
    BucketNotFound(String),

    #[error("project {0} already exists")]
    ProjectExists(String),

    #[error("provider name {0} already in use")]
    CloudProviderExists(String),

    #[error("bucket name {bucket} already in use on the provider {provider}")]
    BucketExists { bucket: String, provider: String },

    #[error("project {0} still has buckets associated with it")]
    ProjectHasBuckets(String),

    #[error("provider {0} is in use by projects")]
    CloudProviderInUse(String),

    #[error("building resource data")]
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
