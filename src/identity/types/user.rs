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

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::BuilderError;

/// Local user record.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct User {
    /// The ID of the user.
    pub id: i32,
    /// The user name. Unique across the installation.
    pub username: String,
    /// Email address.
    #[builder(default)]
    pub email: Option<String>,
    /// Whether the user may use the administrative API.
    #[builder(default)]
    pub is_admin: bool,
    /// Name of the identity provider the user logged in with.
    #[builder(default)]
    pub identity_provider: Option<String>,
    /// Disabled users can not log in.
    #[builder(default = "true")]
    pub active: bool,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct UserCreate {
    /// The user name.
    #[validate(length(min = 1, max = 255))]
    pub username: String,
    /// Email address.
    #[builder(default)]
    #[validate(email)]
    pub email: Option<String>,
    /// Administrator flag.
    #[builder(default)]
    pub is_admin: bool,
    /// Name of the identity provider.
    #[builder(default)]
    #[validate(length(max = 255))]
    pub identity_provider: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_builder_defaults() {
        let user = UserBuilder::default()
            .id(1)
            .username("alice")
            .build()
            .unwrap();
        assert!(user.active);
        assert!(!user.is_admin);
        assert!(user.identity_provider.is_none());
    }

    #[test]
    fn test_user_create_validation() {
        let user = UserCreateBuilder::default()
            .username("")
            .build()
            .unwrap();
        assert!(user.validate().is_err());
        let user = UserCreateBuilder::default()
            .username("alice")
            .email("not-an-email")
            .build()
            .unwrap();
        assert!(user.validate().is_err());
        let user = UserCreateBuilder::default()
            .username("alice")
            .email("alice@example.org")
            .identity_provider("fence")
            .build()
            .unwrap();
        assert!(user.validate().is_ok());
    }
}
