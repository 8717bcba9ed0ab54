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
//! Post login redirect validation.

use url::Url;

use crate::config::Config;
use crate::federation::error::LoginError;

/// Validates that the post login target stays within the trusted hosts.
#[derive(Clone, Debug, Default)]
pub struct RedirectValidator {
    allowed_hosts: Vec<String>,
}

impl RedirectValidator {
    pub fn new<I, S>(allowed_hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_hosts: allowed_hosts
                .into_iter()
                .map(|x| x.into().to_lowercase())
                .collect(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.allowed_redirect_hosts())
    }

    /// Accept a same origin path or an absolute http(s) url of an allowed host.
    pub fn validate(&self, redirect: &str) -> Result<(), LoginError> {
        if redirect.starts_with('/') && !redirect.starts_with("//") && !redirect.contains('\\') {
            return Ok(());
        }
        let url = Url::parse(redirect)
            .map_err(|_| LoginError::InvalidRedirect(redirect.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(LoginError::InvalidRedirect(redirect.to_string()));
        }
        match url.host_str() {
            Some(host) if self.allowed_hosts.iter().any(|x| x == host) => Ok(()),
            _ => Err(LoginError::InvalidRedirect(redirect.to_string())),
        }
    }
}
