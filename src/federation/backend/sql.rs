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

mod login_session;

use super::FederationBackend;
use crate::federation::FederationProviderError;
use crate::federation::types::*;
use crate::fence::ServiceState;

#[derive(Clone, Debug, Default)]
pub struct SqlBackend {}

#[async_trait]
impl FederationBackend for SqlBackend {
    /// Get login session by id
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn get_login_session<'a>(
        &self,
        state: &ServiceState,
        id: &'a str,
    ) -> Result<Option<LoginSession>, FederationProviderError> {
        Ok(login_session::get(&state.db, id).await?)
    }

    /// Insert or update the login session
    #[tracing::instrument(level = "debug", skip(self, state, session), fields(id = %session.id))]
    async fn save_login_session(
        &self,
        state: &ServiceState,
        session: LoginSession,
    ) -> Result<LoginSession, FederationProviderError> {
        Ok(login_session::save(&state.db, session).await?)
    }

    /// Delete login session
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn delete_login_session<'a>(
        &self,
        state: &ServiceState,
        id: &'a str,
    ) -> Result<(), FederationProviderError> {
        Ok(login_session::delete(&state.db, id).await?)
    }

    /// Delete expired login sessions
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn cleanup_expired_sessions(
        &self,
        state: &ServiceState,
    ) -> Result<u64, FederationProviderError> {
        Ok(login_session::delete_expired(&state.db).await?)
    }
}
