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
//! Identity token claims.

use serde_json::Value;
use std::collections::HashMap;

use crate::federation::error::TokenValidationError;

/// Claims of the validated identity token the login relies on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdentityClaims {
    /// Provider namespaced username (`context.user.name`).
    pub username: String,
    /// Purpose tag (`pur`).
    pub purpose: Option<String>,
    pub audiences: Vec<String>,
}

impl IdentityClaims {
    /// Extract the claims from the token audiences and the non standard claims.
    pub fn from_claims(
        audiences: Vec<String>,
        claims: &HashMap<String, Value>,
    ) -> Result<Self, TokenValidationError> {
        let username = claims
            .get("context")
            .and_then(|ctx| ctx.get("user"))
            .and_then(|user| user.get("name"))
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .ok_or(TokenValidationError::MissingUsername)?;
        Ok(Self {
            username: username.to_string(),
            purpose: claims
                .get("pur")
                .and_then(Value::as_str)
                .map(ToString::to_string),
            audiences,
        })
    }

    /// Require the audience to be present and the purpose to match.
    pub fn verify(&self, audience: &str, purpose: &str) -> Result<(), TokenValidationError> {
        if !self.audiences.iter().any(|x| x == audience) {
            return Err(TokenValidationError::Audience {
                expected: audience.to_string(),
            });
        }
        if self.purpose.as_deref() != Some(purpose) {
            return Err(TokenValidationError::Purpose {
                expected: purpose.to_string(),
                found: self.purpose.clone(),
            });
        }
        Ok(())
    }
}
