//! PostgreSQL repositories
//!
//! Each repository borrows the shared pool and issues explicit SQL:
//! - lists are ordered by id (insertion order)
//! - writes use `RETURNING` so no second round-trip is needed
//! - missing rows surface as `DbError::NotFound`

pub mod departments;
pub mod employees;

pub use departments::DepartmentRepo;
pub use employees::EmployeeRepo;
