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

pub use super::access_privilege::Entity as AccessPrivilege;
pub use super::bucket::Entity as Bucket;
pub use super::cloud_provider::Entity as CloudProvider;
pub use super::group::Entity as Group;
pub use super::login_session::Entity as LoginSession;
pub use super::project::Entity as Project;
pub use super::project_to_bucket::Entity as ProjectToBucket;
pub use super::storage_access::Entity as StorageAccess;
pub use super::user::Entity as User;
pub use super::user_to_group::Entity as UserToGroup;
