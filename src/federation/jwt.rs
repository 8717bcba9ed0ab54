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
//! # Identity token validation
//!
//! The identity token returned by the upstream provider is verified against
//! the signing keys published by the provider (JWKS). Keys are cached for the
//! whole process and refreshed when the validation fails in a way permitted by
//! the configured [`KeyRefreshPolicy`]. The token is retried exactly once after
//! the refresh.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::future::Future;
use std::str::FromStr;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use openidconnect::core::{
    CoreGenderClaim, CoreIdTokenVerifier, CoreJsonWebKey, CoreJweContentEncryptionAlgorithm,
    CoreJwsSigningAlgorithm, CoreProviderMetadata,
};
use openidconnect::reqwest;
use openidconnect::{
    AdditionalClaims, ClientId, IdToken, IssuerUrl, JsonWebKeySet, JsonWebKeySetUrl, Nonce,
};

use crate::config::KeyRefreshPolicy;
use crate::federation::error::{LoginError, TokenValidationError};
use crate::federation::types::IdentityClaims;

/// Audience the identity token must carry.
pub const ID_TOKEN_AUDIENCE: &str = "openid";
/// Purpose (`pur`) of the identity token.
pub const ID_TOKEN_PURPOSE: &str = "id";

/// Identity token validation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdTokenValidator: Send + Sync {
    /// Verify the token and return its claims.
    async fn validate_identity_token(&self, id_token: &str) -> Result<IdentityClaims, LoginError>;
}

impl KeyRefreshPolicy {
    /// Whether the failure permits refreshing the keys and retrying.
    pub fn should_refresh(&self, err: &TokenValidationError) -> bool {
        match self {
            Self::Never => false,
            Self::Any => !matches!(err, TokenValidationError::KeyFetch(_)),
            Self::Signature => matches!(err, TokenValidationError::Signature(_)),
        }
    }
}

/// Run the validation, refreshing the keys and retrying once when the policy
/// allows it.
pub async fn validate_with_refresh<V, VFut, R, RFut>(
    policy: KeyRefreshPolicy,
    mut validate: V,
    refresh: R,
) -> Result<IdentityClaims, TokenValidationError>
where
    V: FnMut() -> VFut,
    VFut: Future<Output = Result<IdentityClaims, TokenValidationError>>,
    R: FnOnce() -> RFut,
    RFut: Future<Output = Result<(), TokenValidationError>>,
{
    match validate().await {
        Ok(claims) => Ok(claims),
        Err(err) if policy.should_refresh(&err) => {
            debug!("identity token validation failed ({err}), refreshing signing keys");
            refresh().await?;
            validate().await
        }
        Err(err) => Err(err),
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AllOtherClaims(HashMap<String, serde_json::Value>);
impl AdditionalClaims for AllOtherClaims {}

type FenceIdToken = IdToken<
    AllOtherClaims,
    CoreGenderClaim,
    CoreJweContentEncryptionAlgorithm,
    CoreJwsSigningAlgorithm,
>;

/// Identity token validator using the signing keys of the OpenID Connect provider.
pub struct OidcIdTokenValidator {
    client_id: ClientId,
    issuer: IssuerUrl,
    jwks_uri: JsonWebKeySetUrl,
    http_client: reqwest::Client,
    keys: RwLock<JsonWebKeySet<CoreJsonWebKey>>,
    policy: KeyRefreshPolicy,
}

impl OidcIdTokenValidator {
    pub fn new(
        metadata: &CoreProviderMetadata,
        client_id: ClientId,
        http_client: reqwest::Client,
        policy: KeyRefreshPolicy,
    ) -> Self {
        Self {
            client_id,
            issuer: metadata.issuer().clone(),
            jwks_uri: metadata.jwks_uri().clone(),
            http_client,
            keys: RwLock::new(metadata.jwks().clone()),
            policy,
        }
    }

    async fn verify(&self, id_token: &str) -> Result<IdentityClaims, TokenValidationError> {
        let token = FenceIdToken::from_str(id_token)
            .map_err(|err| TokenValidationError::Malformed(err.to_string()))?;
        let keys = self.keys.read().await.clone();
        // The upstream token audiences are scopes rather than the client id.
        let verifier = CoreIdTokenVerifier::new_public_client(
            self.client_id.clone(),
            self.issuer.clone(),
            keys,
        )
        .require_audience_match(false);
        let nonce_verifier = |_nonce: Option<&Nonce>| Ok(());
        let claims = token.into_claims(&verifier, &nonce_verifier)?;

        let res = IdentityClaims::from_claims(
            claims
                .audiences()
                .iter()
                .map(|x| x.as_str().to_string())
                .collect(),
            &claims.additional_claims().0,
        )?;
        res.verify(ID_TOKEN_AUDIENCE, ID_TOKEN_PURPOSE)?;
        Ok(res)
    }

    async fn refresh_keys(&self) -> Result<(), TokenValidationError> {
        let keys: JsonWebKeySet<CoreJsonWebKey> =
            JsonWebKeySet::fetch_async(&self.jwks_uri, &self.http_client)
                .await
                .map_err(|err| TokenValidationError::KeyFetch(err.to_string()))?;
        *self.keys.write().await = keys;
        Ok(())
    }
}

#[async_trait]
impl IdTokenValidator for OidcIdTokenValidator {
    #[tracing::instrument(level = "debug", skip_all)]
    async fn validate_identity_token(&self, id_token: &str) -> Result<IdentityClaims, LoginError> {
        validate_with_refresh(
            self.policy,
            || self.verify(id_token),
            || self.refresh_keys(),
        )
        .await
        .map_err(|err| {
            warn!("identity token rejected: {err}");
            LoginError::from(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn claims() -> IdentityClaims {
        IdentityClaims {
            username: "alice".into(),
            purpose: Some("id".into()),
            audiences: vec!["openid".into()],
        }
    }

    /// Validation failing with `first` and then succeeding.
    async fn run(
        policy: KeyRefreshPolicy,
        first: TokenValidationError,
    ) -> (Result<IdentityClaims, TokenValidationError>, usize, usize) {
        let attempts = AtomicUsize::new(0);
        let refreshes = AtomicUsize::new(0);
        let mut first = Some(first);
        let res = validate_with_refresh(
            policy,
            || {
                attempts.fetch_add(1, Ordering::SeqCst);
                let res = match first.take() {
                    Some(err) => Err(err),
                    None => Ok(claims()),
                };
                async move { res }
            },
            || {
                refreshes.fetch_add(1, Ordering::SeqCst);
                async { Ok(()) }
            },
        )
        .await;
        (
            res,
            attempts.load(Ordering::SeqCst),
            refreshes.load(Ordering::SeqCst),
        )
    }

    #[tokio::test]
    async fn test_signature_policy() {
        let (res, attempts, refreshes) = run(
            KeyRefreshPolicy::Signature,
            TokenValidationError::Signature("no matching key".into()),
        )
        .await;
        assert_eq!(claims(), res.unwrap());
        assert_eq!((2, 1), (attempts, refreshes));

        let (res, attempts, refreshes) = run(
            KeyRefreshPolicy::Signature,
            TokenValidationError::Audience {
                expected: "openid".into(),
            },
        )
        .await;
        assert!(matches!(res, Err(TokenValidationError::Audience { .. })));
        assert_eq!((1, 0), (attempts, refreshes));
    }

    #[tokio::test]
    async fn test_never_policy() {
        let (res, attempts, refreshes) = run(
            KeyRefreshPolicy::Never,
            TokenValidationError::Signature("no matching key".into()),
        )
        .await;
        assert!(res.is_err());
        assert_eq!((1, 0), (attempts, refreshes));
    }

    #[tokio::test]
    async fn test_any_policy() {
        let (res, attempts, refreshes) = run(
            KeyRefreshPolicy::Any,
            TokenValidationError::Purpose {
                expected: "id".into(),
                found: None,
            },
        )
        .await;
        assert!(res.is_ok());
        assert_eq!((2, 1), (attempts, refreshes));
    }

    #[tokio::test]
    async fn test_retry_only_once() {
        let attempts = AtomicUsize::new(0);
        let res = validate_with_refresh(
            KeyRefreshPolicy::Any,
            || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async {
                    Err(TokenValidationError::Audience {
                        expected: "openid".into(),
                    })
                }
            },
            || async { Ok(()) },
        )
        .await;
        assert!(matches!(res, Err(TokenValidationError::Audience { .. })));
        assert_eq!(2, attempts.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_refresh_failure() {
        let res = validate_with_refresh(
            KeyRefreshPolicy::Signature,
            || async { Err(TokenValidationError::Signature("bad".into())) },
            || async { Err(TokenValidationError::KeyFetch("offline".into())) },
        )
        .await;
        assert!(matches!(res, Err(TokenValidationError::KeyFetch(_))));
    }

    #[test]
    fn test_malformed_token() {
        assert!(FenceIdToken::from_str("not-a-jwt").is_err());
    }
}
