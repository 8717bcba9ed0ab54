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

use crate::federation::backend::error::*;
use crate::identity::error::IdentityProviderError;

#[derive(Error, Debug)]
pub enum FederationProviderError {
    /// Unsupported driver.
    #[error("unsupported driver {0}")]
    UnsupportedDriver(String),

    #[error("login session {0} not found")]
    LoginSessionNotFound(String),

    /// Conflict.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Federation backend error.
    #[error(transparent)]
    FederationDatabase { source: FederationDatabaseError },
}

impl From<FederationDatabaseError> for FederationProviderError {
    fn from(source: FederationDatabaseError) -> Self {
        match source {
            FederationDatabaseError::Database { source } => match source {
                cfl @ crate::error::DatabaseError::Conflict { .. } => {
                    Self::Conflict(cfl.to_string())
                }
                other => Self::FederationDatabase {
                    source: FederationDatabaseError::Database { source: other },
                },
            },
            FederationDatabaseError::LoginSessionNotFound(x) => Self::LoginSessionNotFound(x),
            _ => Self::FederationDatabase { source },
        }
    }
}

/// Identity token validation failure.
#[derive(Error, Debug)]
pub enum TokenValidationError {
    /// The token is not a well formed JWT.
    #[error("malformed identity token: {0}")]
    Malformed(String),

    /// No key matched the token or the signature did not verify.
    #[error("identity token signature verification failed: {0}")]
    Signature(String),

    #[error("identity token claims verification failed: {0}")]
    Claims(String),

    #[error("identity token audience does not include {expected}")]
    Audience { expected: String },

    #[error("identity token purpose is {found:?}, expected {expected}")]
    Purpose {
        expected: String,
        found: Option<String>,
    },

    #[error("identity token does not name the user")]
    MissingUsername,

    /// Signing keys can not be refreshed.
    #[error("fetching signing keys: {0}")]
    KeyFetch(String),
}

impl From<openidconnect::ClaimsVerificationError> for TokenValidationError {
    fn from(value: openidconnect::ClaimsVerificationError) -> Self {
        match value {
            openidconnect::ClaimsVerificationError::SignatureVerification(err) => {
                Self::Signature(err.to_string())
            }
            other => Self::Claims(other.to_string()),
        }
    }
}

/// Federated login failure.
#[derive(Error, Debug)]
pub enum LoginError {
    #[error(
        "Login flow was interrupted (state mismatch). Please go back to the login page for the original application to continue."
    )]
    StateMismatch,

    /// Redirect target is not allowed.
    #[error("invalid redirect {0}")]
    InvalidRedirect(String),

    /// `{provider}` path parameter does not name the configured upstream.
    #[error("login provider {0} is not supported")]
    UnknownProvider(String),

    #[error("federated login is not configured")]
    NotConfigured,

    #[error("discovery error: {msg}")]
    Discovery { msg: String },

    #[error("authorization code is missing in the callback")]
    MissingCode,

    #[error("error exchanging authorization code for the token: {msg}")]
    RequestToken { msg: String },

    #[error("server did not return an identity token")]
    NoIdToken,

    #[error(transparent)]
    Token {
        #[from]
        source: TokenValidationError,
    },

    /// The user is disabled.
    #[error("user {0} is not active")]
    UserInactive(String),

    #[error(transparent)]
    Identity {
        #[from]
        source: IdentityProviderError,
    },

    #[error(transparent)]
    Federation {
        #[from]
        source: FederationProviderError,
    },

    #[error(transparent)]
    OpenIdConnectReqwest {
        #[from]
        source: openidconnect::reqwest::Error,
    },

    #[error(transparent)]
    UrlParse {
        #[from]
        source: url::ParseError,
    },
}

impl LoginError {
    pub fn discovery<T: std::error::Error>(fail: &T) -> Self {
        Self::Discovery {
            msg: fail.to_string(),
        }
    }

    pub fn request_token<T: std::error::Error>(fail: &T) -> Self {
        Self::RequestToken {
            msg: fail.to_string(),
        }
    }
}
