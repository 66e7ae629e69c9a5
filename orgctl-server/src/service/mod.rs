//! Service layer between HTTP handlers and the store
//!
//! A missing row is an expected outcome here, not an error: lookups return
//! `Option`, updates and deletes return `bool`. Reference violations and
//! store failures still propagate as `DbError`.

pub mod departments;
pub mod employees;

pub use departments::DepartmentService;
pub use employees::EmployeeService;

use crate::db::DbError;

/// Map `NotFound` to `None`, keep every other outcome.
fn found<T>(result: Result<T, DbError>) -> Result<Option<T>, DbError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
