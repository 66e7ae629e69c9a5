//! Database layer - connection pool, schema, and stores
//!
//! # Design Principles
//!
//! - One pool per process, opened at startup and closed at shutdown
//! - Explicit SQL per entity; no check-then-insert for references
//! - Cascade delete is declared on the `employee.department_id` foreign key

pub mod error;
pub mod memory;
pub mod pool;
pub mod postgres;
pub mod repos;
pub mod schema;
pub mod store;

pub use error::DbError;
pub use memory::MemoryStore;
pub use pool::create_pool;
pub use postgres::PgStore;
pub use schema::ensure_schema;
pub use store::OrgStore;
