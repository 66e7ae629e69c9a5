//! Employee operations

use std::sync::Arc;

use super::found;
use crate::db::{DbError, OrgStore};
use crate::models::{Employee, NewEmployee};

#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn OrgStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn OrgStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Employee>, DbError> {
        self.store.list_employees().await
    }

    pub async fn get(&self, id: i32) -> Result<Option<Employee>, DbError> {
        found(self.store.get_employee(id).await)
    }

    /// Fails with `DbError::ReferenceViolation` if the department is unknown.
    pub async fn create(&self, new: &NewEmployee) -> Result<Employee, DbError> {
        self.store.create_employee(new).await
    }

    pub async fn update(&self, id: i32, new: &NewEmployee) -> Result<bool, DbError> {
        Ok(found(self.store.update_employee(id, new).await)?.is_some())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbError> {
        Ok(found(self.store.delete_employee(id).await)?.is_some())
    }
}
