//! Database maintenance commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use orgctl_server::db::{create_pool, ensure_schema};
use orgctl_server::{DatabaseConfig, OrgStore, PgStore};

use super::DatabaseArgs;

#[derive(Args)]
pub struct DbArgs {
    #[command(subcommand)]
    pub command: DbCommand,
}

#[derive(Subcommand)]
pub enum DbCommand {
    /// Open a connection and run a test query
    Check(DatabaseArgs),
    /// Create the department and employee tables if they are missing
    Init(DatabaseArgs),
}

pub async fn run_db(args: DbArgs) -> Result<()> {
    match args.command {
        DbCommand::Check(db) => {
            let store = connect(db).await?;
            let result = store.ping().await;
            store.close().await;
            result.context("Test query failed")?;
            println!("Database connection OK");
        }
        DbCommand::Init(db) => {
            let store = connect(db).await?;
            let result = ensure_schema(store.pool()).await;
            store.close().await;
            result.context("Failed to create tables")?;
            println!("Tables ready: department, employee");
        }
    }

    Ok(())
}

async fn connect(args: DatabaseArgs) -> Result<PgStore> {
    let pool = create_pool(&DatabaseConfig::from(args))
        .await
        .context("Failed to connect to database")?;
    Ok(PgStore::new(pool))
}
