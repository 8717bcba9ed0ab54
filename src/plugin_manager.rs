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
//! # Plugin manager
//!
//! A driver, also known as a backend, is an abstraction around the data access
//! needed by a particular provider. Fence ships the `sql` drivers, but any
//! implementation of the backend trait may be registered under a custom name
//! and selected with the `driver` option of the provider configuration
//! section.
//!
//! The [PluginManager] is responsible for picking the proper backend driver for
//! the provider.
use std::collections::HashMap;
use std::sync::Arc;

use crate::assignment::backend::AssignmentBackend;
use crate::federation::backend::FederationBackend;
use crate::identity::backend::IdentityBackend;
use crate::resource::backend::ResourceBackend;

/// Plugin manager allowing to pass custom backend plugins implementing required
/// trait during the service start.
#[derive(Clone, Default)]
pub struct PluginManager {
    /// Assignments backend plugins.
    assignment_backends: HashMap<String, Arc<dyn AssignmentBackend>>,
    /// Federation backend plugins.
    federation_backends: HashMap<String, Arc<dyn FederationBackend>>,
    /// Identity backend plugins.
    identity_backends: HashMap<String, Arc<dyn IdentityBackend>>,
    /// Resource backend plugins.
    resource_backends: HashMap<String, Arc<dyn ResourceBackend>>,
}

impl PluginManager {
    /// Register assignment backend.
    pub fn register_assignment_backend<S: AsRef<str>>(
        &mut self,
        name: S,
        plugin: Arc<dyn AssignmentBackend>,
    ) {
        self.assignment_backends
            .insert(name.as_ref().to_string(), plugin);
    }

    /// Register federation backend.
    pub fn register_federation_backend<S: AsRef<str>>(
        &mut self,
        name: S,
        plugin: Arc<dyn FederationBackend>,
    ) {
        self.federation_backends
            .insert(name.as_ref().to_string(), plugin);
    }

    /// Register identity backend.
    pub fn register_identity_backend<S: AsRef<str>>(
        &mut self,
        name: S,
        plugin: Arc<dyn IdentityBackend>,
    ) {
        self.identity_backends
            .insert(name.as_ref().to_string(), plugin);
    }

    /// Register resource backend.
    pub fn register_resource_backend<S: AsRef<str>>(
        &mut self,
        name: S,
        plugin: Arc<dyn ResourceBackend>,
    ) {
        self.resource_backends
            .insert(name.as_ref().to_string(), plugin);
    }

    /// Get registered assignment backend.
    pub fn get_assignment_backend<S: AsRef<str>>(
        &self,
        name: S,
    ) -> Option<&Arc<dyn AssignmentBackend>> {
        self.assignment_backends.get(name.as_ref())
    }

    /// Get registered federation backend.
    pub fn get_federation_backend<S: AsRef<str>>(
        &self,
        name: S,
    ) -> Option<&Arc<dyn FederationBackend>> {
        self.federation_backends.get(name.as_ref())
    }

    /// Get registered identity backend.
    pub fn get_identity_backend<S: AsRef<str>>(
        &self,
        name: S,
    ) -> Option<&Arc<dyn IdentityBackend>> {
        self.identity_backends.get(name.as_ref())
    }

    /// Get registered resource backend.
    pub fn get_resource_backend<S: AsRef<str>>(
        &self,
        name: S,
    ) -> Option<&Arc<dyn ResourceBackend>> {
        self.resource_backends.get(name.as_ref())
    }
}
