//! HTTP server command
//!
//! Opens the process-wide pool, makes sure the tables exist, then serves
//! until Ctrl+C/SIGTERM. The pool is closed by the server on the way out.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use orgctl_server::db::{create_pool, ensure_schema};
use orgctl_server::{run_server, DatabaseConfig, MemoryStore, OrgStore, PgStore, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "ORGCTL_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Do not create missing tables at startup
    #[arg(long)]
    pub skip_schema: bool,

    /// Serve from an in-memory store instead of PostgreSQL (data is lost on exit)
    #[arg(long, conflicts_with = "skip_schema")]
    pub in_memory: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn OrgStore> = if args.in_memory {
        tracing::warn!("Using in-memory store; data will not persist");
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(open_pg_store(args.db, args.skip_schema).await?)
    };

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    tracing::info!("Starting orgctl server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}

async fn open_pg_store(args: DatabaseArgs, skip_schema: bool) -> Result<PgStore> {
    let db_config = DatabaseConfig::from(args);
    tracing::debug!(?db_config, "Database configuration");

    let pool = create_pool(&db_config)
        .await
        .context("Failed to create database pool. Set --database-url, DATABASE_URL, or DB_* variables")?;

    if !skip_schema {
        if let Err(e) = ensure_schema(&pool).await {
            pool.close().await;
            return Err(e).context("Failed to create tables");
        }
    }

    Ok(PgStore::new(pool))
}
