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

//! # Error
//!
//! Diverse errors that can occur during the Fence processing (not the API).
use sea_orm::SqlErr;
use thiserror::Error;

use crate::assignment::error::*;
use crate::federation::error::*;
use crate::identity::error::*;
use crate::resource::error::*;

/// Fence error.
#[derive(Debug, Error)]
pub enum FenceError {
    #[error(transparent)]
    AssignmentError {
        #[from]
        source: AssignmentProviderError,
    },

    #[error(transparent)]
    FederationError {
        #[from]
        source: FederationProviderError,
    },

    #[error(transparent)]
    IdentityError {
        #[from]
        source: IdentityProviderError,
    },

    #[error(transparent)]
    IO {
        #[from]
        source: std::io::Error,
    },

    #[error(transparent)]
    Login {
        #[from]
        source: LoginError,
    },

    #[error(transparent)]
    ResourceError {
        #[from]
        source: ResourceProviderError,
    },

    /// Json serialization error.
    #[error("json serde error: {}", source)]
    JsonError {
        /// The source of the error.
        #[from]
        source: serde_json::Error,
    },

    /// Url parsing error
    #[error(transparent)]
    UrlParse {
        #[from]
        source: url::ParseError,
    },
}

/// Error of the structure builders.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// Mandatory field was not set.
    #[error("{0}")]
    UninitializedField(String),

    /// Custom validation error.
    #[error("{0}")]
    Validation(String),
}

impl From<derive_builder::UninitializedFieldError> for BuilderError {
    fn from(value: derive_builder::UninitializedFieldError) -> Self {
        Self::UninitializedField(value.to_string())
    }
}

impl From<String> for BuilderError {
    fn from(value: String) -> Self {
        Self::Validation(value)
    }
}

/// Database operation error with the context of the operation.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Unique or foreign key constraint violation.
    #[error("{message}")]
    Conflict { message: String, context: String },

    /// Other SQL error reported by the driver.
    #[error("{message}")]
    Sql { message: String, context: String },

    /// Generic database error.
    #[error("database error while {context}")]
    Database {
        #[source]
        source: sea_orm::DbErr,
        context: String,
    },
}

/// Attach the operation context to the raw database error.
pub trait DbContextExt<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T, DatabaseError>;
}

impl<T> DbContextExt<T> for Result<T, sea_orm::DbErr> {
    fn context<C: Into<String>>(self, context: C) -> Result<T, DatabaseError> {
        self.map_err(|err| db_err(err, context.into()))
    }
}

/// Convert the DB error into the [DatabaseError] with the context information.
pub fn db_err(e: sea_orm::DbErr, context: String) -> DatabaseError {
    e.sql_err().map_or_else(
        || DatabaseError::Database {
            source: e,
            context: context.clone(),
        },
        |err| match err {
            SqlErr::UniqueConstraintViolation(descr) => DatabaseError::Conflict {
                message: descr.to_string(),
                context: context.clone(),
            },
            SqlErr::ForeignKeyConstraintViolation(descr) => DatabaseError::Conflict {
                message: descr.to_string(),
                context: context.clone(),
            },
            other => DatabaseError::Sql {
                message: other.to_string(),
                context: context.clone(),
            },
        },
    )
}
