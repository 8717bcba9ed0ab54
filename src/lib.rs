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
//! # Fence
//!
//! Fence is the authentication and authorization gateway of a data commons.
//! This crate implements two of its parts:
//!
//! - the federated login: the user is sent to the upstream OpenID Connect
//!   provider (usually another fence instance) and, once the provider
//!   redirects back with the authorization grant, the identity token is
//!   validated and a local login session is established for the user;
//!
//! - the user data model: users, groups, projects, cloud providers and the
//!   storage buckets of the projects together with the access privileges of
//!   users and groups on the projects. The model is managed through the
//!   administrative API.
//!
//! The service follows the provider/backend layout: every functional area is
//! a provider exposing an async API trait and delegating the storage to a
//! pluggable backend driver (see [plugin_manager]).

pub mod api;
pub mod assignment;
pub mod config;
pub mod db;
pub mod db_migration;
pub mod error;
pub mod federation;
pub mod fence;
pub mod identity;
pub mod plugin_manager;
pub mod provider;
pub mod resource;

#[cfg(test)]
mod tests;
