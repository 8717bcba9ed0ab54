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
//! Fence database management: schema migrations and bootstrap of the user data.
use clap::{Parser, Subcommand};
use color_eyre::Report;
use eyre::WrapErr;
use secrecy::ExposeSecret;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    prelude::*,
};

use sea_orm::ConnectOptions;
use sea_orm::{Database, DatabaseConnection};

use sea_orm_migration::prelude::*;

use fence::config::{Config, DEFAULT_CONFIG_PATH};
use fence::db_migration::Migrator;
use fence::federation::FederationApi;
use fence::fence::{Service, ServiceState};
use fence::identity::IdentityApi;
use fence::identity::types::UserCreate;
use fence::plugin_manager::PluginManager;
use fence::provider::Provider;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Path to the fence config file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Verbosity level. Repeat to increase level.
    #[arg(short, long, global=true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending migrations.
    Up {
        /// Number of pending migrations to apply.
        #[arg(short('n'))]
        steps: Option<u32>,
    },
    /// Rollback applied migrations.
    Down {
        /// Number of migrations to rollback.
        #[arg(short('n'))]
        steps: Option<u32>,
    },
    /// Check the status of all migrations.
    Status,
    /// Drop all tables from the database, then reapply all migrations.
    Fresh,
    /// Rollback all applied migrations.
    Reset,
    /// Create an administrator able to use the administrative API.
    CreateAdmin {
        /// The user name as asserted by the upstream identity provider.
        username: String,
        /// Email address of the user.
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete expired login sessions.
    PurgeSessions,
}

#[allow(clippy::print_stdout)]
#[tokio::main]
async fn main() -> Result<(), Report> {
    let cli = Cli::parse();

    let filter = Targets::new().with_default(match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    });

    let log_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(log_layer).init();
    let cfg = Config::new(cli.config)?;
    let opt: ConnectOptions = ConnectOptions::new(cfg.database.get_connection().expose_secret())
        // Prevent dumping the password in plaintext.
        .sqlx_logging(false)
        .to_owned();

    info!("Establishing the database connection...");
    let conn = Database::connect(opt)
        .await
        .wrap_err("Database connection failed")?;

    match cli.command {
        Commands::Up { steps } => {
            Migrator::up(&conn, steps).await?;
        }
        Commands::Down { steps } => {
            Migrator::down(&conn, steps).await?;
        }
        Commands::Status => {
            let pending = Migrator::get_pending_migrations(&conn).await?;
            if pending.is_empty() {
                println!("No pending migrations!");
            } else {
                println!("Pending migrations:");
                for mig in pending {
                    println!("{}", mig.name());
                }
            }
            println!("Applied migrations:");
            for mig in Migrator::get_applied_migrations(&conn).await? {
                println!("{}", mig.name());
            }
        }
        Commands::Fresh => {
            Migrator::fresh(&conn).await?;
        }
        Commands::Reset => {
            Migrator::reset(&conn).await?;
        }
        Commands::CreateAdmin { username, email } => {
            let state = service_state(cfg, conn)?;
            let user = state
                .provider
                .get_identity_provider()
                .create_user(
                    &state,
                    UserCreate {
                        username,
                        email,
                        is_admin: true,
                        identity_provider: None,
                    },
                )
                .await?;
            println!("Created administrator {} (id {})", user.username, user.id);
        }
        Commands::PurgeSessions => {
            let state = service_state(cfg, conn)?;
            let removed = state
                .provider
                .get_federation_provider()
                .cleanup_expired_sessions(&state)
                .await?;
            println!("Removed {removed} expired login sessions");
        }
    }
    Ok(())
}

/// Service state without the upstream provider, which none of the commands talk to.
fn service_state(cfg: Config, conn: DatabaseConnection) -> Result<ServiceState, Report> {
    let provider = Provider::new(cfg.clone(), PluginManager::default())?;
    Ok(Arc::new(Service::new(cfg, conn, provider, None)?))
}
