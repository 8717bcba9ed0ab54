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

use async_trait::async_trait;

use crate::federation::FederationProviderError;
use crate::federation::types::login_session::LoginSession;
use crate::fence::ServiceState;

#[async_trait]
pub trait FederationApi: Send + Sync {
    /// Get the login session by its id.
    async fn get_login_session<'a>(
        &self,
        state: &ServiceState,
        id: &'a str,
    ) -> Result<Option<LoginSession>, FederationProviderError>;

    /// Persist the login session.
    async fn save_login_session(
        &self,
        state: &ServiceState,
        session: LoginSession,
    ) -> Result<LoginSession, FederationProviderError>;

    async fn delete_login_session<'a>(
        &self,
        state: &ServiceState,
        id: &'a str,
    ) -> Result<(), FederationProviderError>;

    /// Drop expired login sessions, returning the amount of removed ones.
    async fn cleanup_expired_sessions(
        &self,
        state: &ServiceState,
    ) -> Result<u64, FederationProviderError>;
}
