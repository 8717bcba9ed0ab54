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
//! # Federated login
//!
//! Two step OAuth2 authorization code flow against the upstream provider:
//!
//! 1. [`start_login`] validates the requested post login target, builds the
//!    authorization url and records the anti-forgery state in the session.
//! 2. [`complete_login`] verifies the returned state (read-once), exchanges
//!    the grant for tokens, validates the identity token, establishes the
//!    local user and finally picks where the browser goes next.
//!
//! A failure in any step leaves the session unauthenticated.

use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{info, warn};
use url::Url;

use crate::federation::error::LoginError;
use crate::federation::jwt::IdTokenValidator;
use crate::federation::oauth::{AuthorizationRequest, OAuthClient};
use crate::federation::redirect::RedirectValidator;
use crate::federation::types::*;
use crate::fence::ServiceState;
use crate::identity::IdentityApi;
use crate::identity::types::UserCreate;

/// Result of the completed login.
#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    /// Continue to the stored post login target.
    Redirect(String),
    /// No target was stored; report the logged in user.
    Username(String),
}

/// Establishes the local session user for the upstream identity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginFinalizer: Send + Sync {
    async fn login_user(&self, username: &str, provider: &str) -> Result<(), LoginError>;
}

/// Start the login returning the upstream authorization url.
///
/// Nothing is stored in the session when the redirect target is rejected.
pub fn start_login(
    oauth: &dyn OAuthClient,
    redirects: &RedirectValidator,
    session: &mut LoginSession,
    query: &LoginQuery,
) -> Result<Url, LoginError> {
    if let Some(redirect) = &query.redirect {
        redirects.validate(redirect)?;
    }
    let params = AuthorizationRequestParameters::from(query);
    let AuthorizationRequest { mut url, state } = oauth.authorization_url()?;
    params.apply(&mut url);

    session.set_redirect(query.redirect.clone());
    session.set_state(state);
    Ok(url)
}

/// Finish the login from the callback query parameters.
pub async fn complete_login(
    oauth: &dyn OAuthClient,
    validator: &dyn IdTokenValidator,
    finalizer: &dyn LoginFinalizer,
    session: &mut LoginSession,
    provider: &str,
    params: &HashMap<String, String>,
) -> Result<LoginOutcome, LoginError> {
    let stored_state = session.take_state();
    match (params.get("state"), stored_state) {
        (Some(received), Some(stored)) if *received == stored => {}
        _ => {
            warn!("login callback state mismatch for session {}", session.id);
            return Err(LoginError::StateMismatch);
        }
    }

    let tokens = oauth.exchange_token(params).await?;
    let claims = validator
        .validate_identity_token(&tokens.id_token)
        .await?;
    finalizer.login_user(&claims.username, provider).await?;

    session.authenticate(claims.username.clone(), provider);
    info!("user {} logged in through {}", claims.username, provider);
    Ok(match session.take_redirect() {
        Some(redirect) => LoginOutcome::Redirect(redirect),
        None => LoginOutcome::Username(claims.username),
    })
}

/// Login finalizer creating unknown users through the identity provider.
pub struct ServiceLoginFinalizer<'a> {
    state: &'a ServiceState,
}

impl<'a> ServiceLoginFinalizer<'a> {
    pub fn new(state: &'a ServiceState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl LoginFinalizer for ServiceLoginFinalizer<'_> {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn login_user(&self, username: &str, provider: &str) -> Result<(), LoginError> {
        let identity = self.state.provider.get_identity_provider();
        let user = match identity.get_user(self.state, username).await? {
            Some(user) => user,
            None => {
                info!("creating user {username} on the first login");
                identity
                    .create_user(
                        self.state,
                        UserCreate {
                            username: username.to_string(),
                            identity_provider: Some(provider.to_string()),
                            ..Default::default()
                        },
                    )
                    .await?
            }
        };
        if !user.active {
            return Err(LoginError::UserInactive(user.username));
        }
        Ok(())
    }
}
