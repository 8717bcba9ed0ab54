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
use mockall::mock;

use crate::config::Config;
use crate::federation::FederationApi;
use crate::federation::error::FederationProviderError;
use crate::federation::types::*;
use crate::fence::ServiceState;
use crate::plugin_manager::PluginManager;

mock! {
    pub FederationProvider {
        pub fn new(cfg: &Config, plugin_manager: &PluginManager) -> Result<Self, FederationProviderError>;
    }

    #[async_trait]
    impl FederationApi for FederationProvider {
        async fn get_login_session<'a>(
            &self,
            state: &ServiceState,
            id: &'a str,
        ) -> Result<Option<LoginSession>, FederationProviderError>;

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

        async fn cleanup_expired_sessions(
            &self,
            state: &ServiceState,
        ) -> Result<u64, FederationProviderError>;
    }

    impl Clone for FederationProvider {
        fn clone(&self) -> Self;
    }
}
