//! Department operations

use std::sync::Arc;

use super::found;
use crate::db::{DbError, OrgStore};
use crate::models::{Department, NewDepartment};

#[derive(Clone)]
pub struct DepartmentService {
    store: Arc<dyn OrgStore>,
}

impl DepartmentService {
    pub fn new(store: Arc<dyn OrgStore>) -> Self {
        Self { store }
    }

    /// All departments; an empty store yields an empty list.
    pub async fn list(&self) -> Result<Vec<Department>, DbError> {
        self.store.list_departments().await
    }

    pub async fn get(&self, id: i32) -> Result<Option<Department>, DbError> {
        found(self.store.get_department(id).await)
    }

    pub async fn create(&self, new: &NewDepartment) -> Result<Department, DbError> {
        self.store.create_department(new).await
    }

    /// Overwrite name and location. `false` if the department does not exist.
    pub async fn update(&self, id: i32, new: &NewDepartment) -> Result<bool, DbError> {
        Ok(found(self.store.update_department(id, new).await)?.is_some())
    }

    /// Delete the department and, through the store, its employees.
    pub async fn delete(&self, id: i32) -> Result<bool, DbError> {
        Ok(found(self.store.delete_department(id).await)?.is_some())
    }
}
