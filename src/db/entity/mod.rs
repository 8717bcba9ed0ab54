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

//! `SeaORM` entities.

pub mod prelude;

pub mod access_privilege;
pub mod bucket;
pub mod cloud_provider;
pub mod group;
pub mod login_session;
pub mod project;
pub mod project_to_bucket;
pub mod storage_access;
pub mod user;
pub mod user_to_group;
