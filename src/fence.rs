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

use axum::extract::FromRef;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::error::FenceError;
use crate::federation::Upstream;
use crate::federation::redirect::RedirectValidator;
use crate::provider::Provider;

// Placing ServiceState behind Arc is necessary to address DatabaseConnection
// not implementing Clone.
#[derive(FromRef)]
pub struct Service {
    /// Config file
    pub config: Config,
    /// Service/resource Provider
    pub provider: Provider,
    /// Database connection
    #[from_ref(skip)]
    pub db: DatabaseConnection,

    /// Upstream identity provider clients. Federated login is disabled without them.
    #[from_ref(skip)]
    pub upstream: Option<Upstream>,

    /// Post login redirect validation.
    pub redirect_validator: RedirectValidator,

    /// Shutdown flag
    pub shutdown: bool,
}

pub type ServiceState = Arc<Service>;

impl Service {
    pub fn new(
        cfg: Config,
        db: DatabaseConnection,
        provider: Provider,
        upstream: Option<Upstream>,
    ) -> Result<Self, FenceError> {
        Ok(Self {
            redirect_validator: RedirectValidator::from_config(&cfg),
            config: cfg.clone(),
            provider,
            db,
            upstream,
            shutdown: false,
        })
    }

    pub async fn terminate(&self) -> Result<(), FenceError> {
        info!("Terminating Fence");
        Ok(())
    }
}
