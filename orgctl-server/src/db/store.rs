//! Storage seam between services and the concrete store

use async_trait::async_trait;

use super::DbError;
use crate::models::{Department, Employee, NewDepartment, NewEmployee};

/// Department and employee persistence.
///
/// Contract shared by every implementation:
/// - `get_*`, `update_*` and `delete_*` return `DbError::NotFound` for a missing id
/// - employee writes naming a missing department return `DbError::ReferenceViolation`
/// - deleting a department removes its employees
/// - lists are in id order
#[async_trait]
pub trait OrgStore: Send + Sync {
    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), DbError>;

    /// Release the store's connections. Called once at shutdown.
    async fn close(&self);

    async fn list_departments(&self) -> Result<Vec<Department>, DbError>;
    async fn get_department(&self, id: i32) -> Result<Department, DbError>;
    async fn create_department(&self, new: &NewDepartment) -> Result<Department, DbError>;
    async fn update_department(&self, id: i32, new: &NewDepartment)
        -> Result<Department, DbError>;
    async fn delete_department(&self, id: i32) -> Result<(), DbError>;

    async fn list_employees(&self) -> Result<Vec<Employee>, DbError>;
    async fn get_employee(&self, id: i32) -> Result<Employee, DbError>;
    async fn create_employee(&self, new: &NewEmployee) -> Result<Employee, DbError>;
    async fn update_employee(&self, id: i32, new: &NewEmployee) -> Result<Employee, DbError>;
    async fn delete_employee(&self, id: i32) -> Result<(), DbError>;
}
