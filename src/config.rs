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

use config::{File, FileFormat};
use eyre::{Report, WrapErr};
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};
use std::path::PathBuf;
use url::Url;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/fence/fence.conf";

#[derive(Debug, Default, Deserialize, Clone)]
pub struct Config {
    /// Global configuration options
    #[serde(rename = "DEFAULT")]
    pub default: Option<DefaultSection>,

    /// Access privileges related configuration
    #[serde(default)]
    pub assignment: AssignmentSection,

    /// Database configuration
    pub database: DatabaseSection,

    /// Federated login
    #[serde(default)]
    pub federation: FederationSection,

    /// Users and groups related configuration
    #[serde(default)]
    pub identity: IdentitySection,

    /// Projects, cloud providers and buckets related configuration.
    #[serde(default)]
    pub resource: ResourceSection,

    /// Browser session (cookie) configuration.
    #[serde(default)]
    pub session: SessionSection,
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct DefaultSection {
    /// Debug logging
    pub debug: Option<bool>,
    /// Public base url of the service. The host is always an allowed login redirect target.
    pub base_url: Option<Url>,
}

pub fn csv<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(String::deserialize(deserializer)?
        .split(',')
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(Into::into)
        .collect())
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct DatabaseSection {
    /// Database URL.
    pub connection: SecretString,
}

impl DatabaseSection {
    /// Connection string without the python style `+driver` suffix of the schema.
    pub fn get_connection(&self) -> SecretString {
        let val = self.connection.expose_secret();
        if val.contains("+") {
            return Regex::new(r"(?<type>\w+)\+(\w+)://")
                .map(|re| SecretString::from(re.replace(val, "${type}://").to_string()))
                .unwrap_or(self.connection.clone());
        }
        self.connection.clone()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssignmentSection {
    #[serde(default = "default_sql_driver")]
    pub driver: String,
}

impl Default for AssignmentSection {
    fn default() -> Self {
        Self {
            driver: default_sql_driver(),
        }
    }
}

/// When the identity token validation may refresh the signing keys and retry.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KeyRefreshPolicy {
    /// Only when no key matched or the signature did not verify.
    #[default]
    Signature,
    /// On every validation failure.
    Any,
    /// Never.
    Never,
}

/// Upstream identity provider configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct FederationSection {
    #[serde(default = "default_sql_driver")]
    pub driver: String,

    /// Name of the upstream identity provider as used in the `/login/{provider}` path and
    /// recorded on the users created by the login.
    #[serde(default = "default_provider_name")]
    pub provider_name: String,

    /// OpenID Connect discovery url of the upstream provider.
    pub discovery_url: Option<Url>,

    /// OAuth2 client id registered at the upstream provider.
    pub client_id: Option<String>,

    /// OAuth2 client secret.
    pub client_secret: Option<SecretString>,

    /// Registered redirect uri (pointing to `/login/{provider}/login`).
    pub redirect_uri: Option<Url>,

    /// Additional hosts allowed as post login redirect targets.
    #[serde(default, deserialize_with = "csv")]
    pub allowed_redirect_hosts: Vec<String>,

    /// Key refresh policy of the identity token validation.
    #[serde(default)]
    pub key_refresh: KeyRefreshPolicy,
}

impl Default for FederationSection {
    fn default() -> Self {
        Self {
            driver: default_sql_driver(),
            provider_name: default_provider_name(),
            discovery_url: None,
            client_id: None,
            client_secret: None,
            redirect_uri: None,
            allowed_redirect_hosts: Vec::new(),
            key_refresh: KeyRefreshPolicy::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct IdentitySection {
    #[serde(default = "default_sql_driver")]
    pub driver: String,
}

impl Default for IdentitySection {
    fn default() -> Self {
        Self {
            driver: default_sql_driver(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResourceSection {
    #[serde(default = "default_sql_driver")]
    pub driver: String,
}

impl Default for ResourceSection {
    fn default() -> Self {
        Self {
            driver: default_sql_driver(),
        }
    }
}

/// Browser session configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct SessionSection {
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Session lifetime in seconds.
    #[serde(default = "default_session_ttl")]
    pub ttl: u64,

    /// Set the `Secure` attribute on the cookie.
    #[serde(default = "default_true")]
    pub secure: bool,
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            ttl: default_session_ttl(),
            secure: true,
        }
    }
}

fn default_sql_driver() -> String {
    "sql".into()
}

fn default_provider_name() -> String {
    "fence".into()
}

fn default_cookie_name() -> String {
    "fence".into()
}

fn default_session_ttl() -> u64 {
    3600
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn new(path: PathBuf) -> Result<Self, Report> {
        let mut builder = config::Config::builder();

        if std::path::Path::new(&path).is_file() {
            builder = builder.add_source(File::from(path).format(FileFormat::Ini));
        }

        builder.try_into()
    }

    /// Host names accepted as post login redirect targets.
    pub fn allowed_redirect_hosts(&self) -> Vec<String> {
        let mut hosts: Vec<String> = self
            .default
            .as_ref()
            .and_then(|x| x.base_url.as_ref())
            .and_then(|x| x.host_str())
            .map(|x| vec![x.to_string()])
            .unwrap_or_default();
        hosts.extend(self.federation.allowed_redirect_hosts.iter().cloned());
        hosts
    }
}

impl TryFrom<config::ConfigBuilder<config::builder::DefaultState>> for Config {
    type Error = Report;
    fn try_from(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, Self::Error> {
        let mut builder = builder;
        builder = builder
            .set_default("federation.provider_name", "fence")?
            .set_default("session.ttl", "3600")?;

        builder
            .build()
            .wrap_err("Failed to read configuration file")?
            .try_deserialize()
            .wrap_err("Failed to parse configuration file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_db_connection() {
        let sot = DatabaseSection {
            connection: "mysql://u:p@h".into(),
        };
        assert_eq!("mysql://u:p@h", sot.get_connection().expose_secret());
        let sot = DatabaseSection {
            connection: "postgresql+psycopg2://u:p@h".into(),
        };
        assert_eq!("postgresql://u:p@h", sot.get_connection().expose_secret());
    }

    #[test]
    fn test_parse_ini() {
        let builder = config::Config::builder().add_source(File::from_str(
            r#"
[database]
connection = sqlite://fence.db

[federation]
client_id = fence-client
allowed_redirect_hosts = app.example, data.example
key_refresh = never

[session]
secure = false
"#,
            FileFormat::Ini,
        ));
        let cfg = Config::try_from(builder).unwrap();
        assert_eq!("sqlite://fence.db", cfg.database.connection.expose_secret());
        assert_eq!("sql", cfg.identity.driver);
        assert_eq!("fence", cfg.federation.provider_name);
        assert_eq!(Some("fence-client".into()), cfg.federation.client_id);
        assert_eq!(
            vec!["app.example".to_string(), "data.example".to_string()],
            cfg.federation.allowed_redirect_hosts
        );
        assert_eq!(KeyRefreshPolicy::Never, cfg.federation.key_refresh);
        assert!(!cfg.session.secure);
        assert_eq!(3600, cfg.session.ttl);
    }

    #[test]
    fn test_allowed_redirect_hosts() {
        let cfg = Config {
            default: Some(DefaultSection {
                debug: None,
                base_url: Some(Url::parse("https://gateway.example/user").unwrap()),
            }),
            federation: FederationSection {
                allowed_redirect_hosts: vec!["app.example".into()],
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            vec!["gateway.example".to_string(), "app.example".to_string()],
            cfg.allowed_redirect_hosts()
        );
    }
}
