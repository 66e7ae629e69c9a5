//! In-memory `OrgStore`
//!
//! Mirrors the PostgreSQL schema's behaviour without a server: sequential
//! ids, a checked `department_id` reference, and cascade on department
//! delete (children first, then the parent). Used by tests and local demos.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use super::{DbError, OrgStore};
use crate::models::{Department, Employee, NewDepartment, NewEmployee};

#[derive(Default)]
struct Tables {
    departments: BTreeMap<i32, Department>,
    employees: BTreeMap<i32, Employee>,
    last_department_id: i32,
    last_employee_id: i32,
}

impl Tables {
    fn require_department(&self, id: i32) -> Result<(), DbError> {
        if self.departments.contains_key(&id) {
            Ok(())
        } else {
            Err(DbError::ReferenceViolation {
                resource: "department",
                id,
            })
        }
    }
}

/// Store held entirely in process memory
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        // No invariant spans a panic point, so a poisoned lock is still usable
        self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl OrgStore for MemoryStore {
    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn close(&self) {}

    async fn list_departments(&self) -> Result<Vec<Department>, DbError> {
        Ok(self.lock().departments.values().cloned().collect())
    }

    async fn get_department(&self, id: i32) -> Result<Department, DbError> {
        self.lock()
            .departments
            .get(&id)
            .cloned()
            .ok_or(DbError::NotFound {
                resource: "department",
                id,
            })
    }

    async fn create_department(&self, new: &NewDepartment) -> Result<Department, DbError> {
        let mut tables = self.lock();
        tables.last_department_id = next_id(tables.last_department_id, "department")?;
        let dept = new.clone().into_record(tables.last_department_id);
        tables.departments.insert(dept.id, dept.clone());
        Ok(dept)
    }

    async fn update_department(
        &self,
        id: i32,
        new: &NewDepartment,
    ) -> Result<Department, DbError> {
        let mut tables = self.lock();
        let slot = tables.departments.get_mut(&id).ok_or(DbError::NotFound {
            resource: "department",
            id,
        })?;
        *slot = new.clone().into_record(id);
        Ok(slot.clone())
    }

    async fn delete_department(&self, id: i32) -> Result<(), DbError> {
        let mut tables = self.lock();
        if !tables.departments.contains_key(&id) {
            return Err(DbError::NotFound {
                resource: "department",
                id,
            });
        }

        tables.employees.retain(|_, emp| emp.department_id != id);
        tables.departments.remove(&id);
        Ok(())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, DbError> {
        Ok(self.lock().employees.values().cloned().collect())
    }

    async fn get_employee(&self, id: i32) -> Result<Employee, DbError> {
        self.lock()
            .employees
            .get(&id)
            .cloned()
            .ok_or(DbError::NotFound {
                resource: "employee",
                id,
            })
    }

    async fn create_employee(&self, new: &NewEmployee) -> Result<Employee, DbError> {
        let mut tables = self.lock();
        tables.require_department(new.department_id())?;
        tables.last_employee_id = next_id(tables.last_employee_id, "employee")?;
        let emp = new.clone().into_record(tables.last_employee_id);
        tables.employees.insert(emp.id, emp.clone());
        Ok(emp)
    }

    async fn update_employee(&self, id: i32, new: &NewEmployee) -> Result<Employee, DbError> {
        let mut tables = self.lock();
        if !tables.employees.contains_key(&id) {
            return Err(DbError::NotFound {
                resource: "employee",
                id,
            });
        }
        tables.require_department(new.department_id())?;

        let emp = new.clone().into_record(id);
        tables.employees.insert(id, emp.clone());
        Ok(emp)
    }

    async fn delete_employee(&self, id: i32) -> Result<(), DbError> {
        self.lock()
            .employees
            .remove(&id)
            .map(|_| ())
            .ok_or(DbError::NotFound {
                resource: "employee",
                id,
            })
    }
}

fn next_id(last: i32, resource: &'static str) -> Result<i32, DbError> {
    last.checked_add(1).ok_or(DbError::IdsExhausted { resource })
}
