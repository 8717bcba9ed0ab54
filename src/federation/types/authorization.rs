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

use serde::Deserialize;
use url::Url;

/// Identity provider the upstream delegates to when set to this value.
pub const SHIBBOLETH_IDP: &str = "shibboleth";

/// Extension parameters of the outbound authorization request.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AuthorizationRequestParameters {
    idp: Option<String>,
    shib_idp: Option<String>,
}

impl AuthorizationRequestParameters {
    /// `shib_idp` is only kept together with the `shibboleth` idp.
    pub fn new(idp: Option<String>, shib_idp: Option<String>) -> Self {
        let shib_idp = match idp.as_deref() {
            Some(SHIBBOLETH_IDP) => shib_idp,
            _ => None,
        };
        Self { idp, shib_idp }
    }

    pub fn idp(&self) -> Option<&str> {
        self.idp.as_deref()
    }

    pub fn shib_idp(&self) -> Option<&str> {
        self.shib_idp.as_deref()
    }

    /// Append the parameters to the authorization url.
    pub fn apply(&self, url: &mut Url) {
        if let Some(idp) = &self.idp {
            url.query_pairs_mut().append_pair("idp", idp);
            if let Some(shib_idp) = &self.shib_idp {
                url.query_pairs_mut().append_pair("shib_idp", shib_idp);
            }
        }
    }
}

/// Query of the `/login/{provider}` request.
#[derive(Clone, Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LoginQuery {
    /// Where to send the browser once the login completes.
    pub redirect: Option<String>,
    /// Identity provider the upstream should use.
    pub idp: Option<String>,
    /// Shibboleth identity provider (only with `idp=shibboleth`).
    pub shib_idp: Option<String>,
}

impl From<&LoginQuery> for AuthorizationRequestParameters {
    fn from(value: &LoginQuery) -> Self {
        Self::new(value.idp.clone(), value.shib_idp.clone())
    }
}
