//! orgctl-server: departments and employees over HTTP
//!
//! Layers, leaves first:
//! - [`models`]: inbound bodies, validation, records
//! - [`db`]: connection pool, schema, `OrgStore` (PostgreSQL and in-memory)
//! - [`service`]: store calls with not-found folded into `Option`/`bool`
//! - [`http`]: axum router, extractors, error mapping, server lifecycle

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod service;

pub use config::DatabaseConfig;
pub use db::{DbError, MemoryStore, OrgStore, PgStore};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
