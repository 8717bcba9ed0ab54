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
//! # Fence API error.
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::assignment::error::AssignmentProviderError;
use crate::federation::error::{FederationProviderError, LoginError};
use crate::identity::error::IdentityProviderError;
use crate::resource::error::ResourceProviderError;

/// Fence API operation errors
#[derive(Debug, Error)]
pub enum FenceApiError {
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("could not find {resource}: {identifier}")]
    NotFound {
        resource: String,
        identifier: String,
    },

    #[error("{0}")]
    BadRequest(String),

    #[error("{}", .0.clone().unwrap_or("The request you have made requires authentication.".to_string()))]
    Unauthorized(Option<String>),

    #[error("You are not authorized to perform the requested action.")]
    Forbidden,

    #[error("internal server error: {0}")]
    InternalError(String),

    #[error(transparent)]
    AssignmentError { source: AssignmentProviderError },

    #[error(transparent)]
    FederationError { source: FederationProviderError },

    #[error(transparent)]
    IdentityError { source: IdentityProviderError },

    #[error(transparent)]
    ResourceError { source: ResourceProviderError },

    #[error(transparent)]
    Serde {
        #[from]
        source: serde_json::Error,
    },

    #[error(transparent)]
    JsonExtractorRejection(#[from] JsonRejection),

    /// Request validation error.
    #[error("request validation failed: {source}")]
    Validator {
        /// The source of the error.
        #[from]
        source: validator::ValidationErrors,
    },
}

impl FenceApiError {
    fn not_found<R: Into<String>, I: Into<String>>(resource: R, identifier: I) -> Self {
        Self::NotFound {
            resource: resource.into(),
            identifier: identifier.into(),
        }
    }
}

impl IntoResponse for FenceApiError {
    fn into_response(self) -> Response {
        let status_code = match self {
            FenceApiError::Conflict(_) => StatusCode::CONFLICT,
            FenceApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            FenceApiError::BadRequest(..) => StatusCode::BAD_REQUEST,
            FenceApiError::Unauthorized(..) => StatusCode::UNAUTHORIZED,
            FenceApiError::Forbidden => StatusCode::FORBIDDEN,
            FenceApiError::InternalError(_)
            | FenceApiError::AssignmentError { .. }
            | FenceApiError::FederationError { .. }
            | FenceApiError::IdentityError { .. }
            | FenceApiError::ResourceError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            FenceApiError::Serde { .. }
            | FenceApiError::JsonExtractorRejection(..)
            | FenceApiError::Validator { .. } => StatusCode::BAD_REQUEST,
        };
        if status_code.is_server_error() {
            error!("Error happened during request processing: {:#?}", self);
        }

        (
            status_code,
            Json(json!({"error": {"code": status_code.as_u16(), "message": self.to_string()}})),
        )
            .into_response()
    }
}

impl From<AssignmentProviderError> for FenceApiError {
    fn from(source: AssignmentProviderError) -> Self {
        match source {
            AssignmentProviderError::UserNotFound(x) => Self::not_found("user", x),
            AssignmentProviderError::GroupNotFound(x) => Self::not_found("group", x),
            AssignmentProviderError::ProjectNotFound(x) => Self::not_found("project", x),
            AssignmentProviderError::GrantNotFound(x) => Self::not_found("access privilege", x),
            AssignmentProviderError::Conflict(x) => Self::Conflict(x),
            AssignmentProviderError::Validation { source } => Self::Validator { source },
            _ => Self::AssignmentError { source },
        }
    }
}

impl From<FederationProviderError> for FenceApiError {
    fn from(source: FederationProviderError) -> Self {
        match source {
            FederationProviderError::LoginSessionNotFound(x) => Self::not_found("login session", x),
            FederationProviderError::Conflict(x) => Self::Conflict(x),
            _ => Self::FederationError { source },
        }
    }
}

impl From<IdentityProviderError> for FenceApiError {
    fn from(source: IdentityProviderError) -> Self {
        match source {
            IdentityProviderError::UserNotFound(x) => Self::not_found("user", x),
            IdentityProviderError::GroupNotFound(x) => Self::not_found("group", x),
            e @ IdentityProviderError::MembershipNotFound { .. } => {
                Self::not_found("group membership", e.to_string())
            }
            IdentityProviderError::Conflict(x) => Self::Conflict(x),
            IdentityProviderError::Validation { source } => Self::Validator { source },
            _ => Self::IdentityError { source },
        }
    }
}

impl From<ResourceProviderError> for FenceApiError {
    fn from(source: ResourceProviderError) -> Self {
        match source {
            ResourceProviderError::ProjectNotFound(x) => Self::not_found("project", x),
            ResourceProviderError::CloudProviderNotFound(x) => Self::not_found("cloud provider", x),
            ResourceProviderError::BucketNotFound(x) => Self::not_found("bucket", x),
            ResourceProviderError::Conflict(x) => Self::Conflict(x),
            ResourceProviderError::Validation { source } => Self::Validator { source },
            _ => Self::ResourceError { source },
        }
    }
}

/// Convert login error into the [HTTP](FenceApiError) with the expected
/// message.
impl From<LoginError> for FenceApiError {
    fn from(value: LoginError) -> Self {
        match value {
            e @ (LoginError::StateMismatch
            | LoginError::InvalidRedirect(_)
            | LoginError::RequestToken { .. }
            | LoginError::NoIdToken
            | LoginError::Token { .. }
            | LoginError::UserInactive(_)) => Self::Unauthorized(Some(e.to_string())),
            e @ LoginError::MissingCode => Self::BadRequest(e.to_string()),
            LoginError::UnknownProvider(x) => Self::not_found("login provider", x),
            e @ LoginError::NotConfigured => Self::not_found("login provider", e.to_string()),
            LoginError::Identity { source } => source.into(),
            LoginError::Federation { source } => source.into(),
            e @ (LoginError::Discovery { .. }
            | LoginError::OpenIdConnectReqwest { .. }
            | LoginError::UrlParse { .. }) => Self::InternalError(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;
    use serde_json::Value;

    use super::*;

    #[tokio::test]
    async fn test_error_body() {
        let response = FenceApiError::from(ResourceProviderError::Conflict(
            "cloud provider aws already exists".into(),
        ))
        .into_response();
        assert_eq!(StatusCode::CONFLICT, response.status());
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let res: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(409, res["error"]["code"]);
    }

    #[tokio::test]
    async fn test_state_mismatch() {
        let response = FenceApiError::from(LoginError::StateMismatch).into_response();
        assert_eq!(StatusCode::UNAUTHORIZED, response.status());
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let res: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            "Login flow was interrupted (state mismatch). Please go back to the login page for the original application to continue.",
            res["error"]["message"]
        );
    }

    #[test]
    fn test_not_linked() {
        assert!(matches!(
            FenceApiError::from(AssignmentProviderError::GrantNotFound("x".into())),
            FenceApiError::NotFound { .. }
        ));
    }
}
