//! PostgreSQL-backed `OrgStore`

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{DepartmentRepo, EmployeeRepo};
use super::{pool, DbError, OrgStore};
use crate::models::{Department, Employee, NewDepartment, NewEmployee};

/// Store backed by the process-wide connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn departments(&self) -> DepartmentRepo<'_> {
        DepartmentRepo::new(&self.pool)
    }

    fn employees(&self) -> EmployeeRepo<'_> {
        EmployeeRepo::new(&self.pool)
    }
}

#[async_trait]
impl OrgStore for PgStore {
    async fn ping(&self) -> Result<(), DbError> {
        pool::ping(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }

    async fn list_departments(&self) -> Result<Vec<Department>, DbError> {
        self.departments().list().await
    }

    async fn get_department(&self, id: i32) -> Result<Department, DbError> {
        self.departments().get(id).await
    }

    async fn create_department(&self, new: &NewDepartment) -> Result<Department, DbError> {
        let dept = self.departments().create(new).await?;
        tracing::debug!(id = dept.id, "department created");
        Ok(dept)
    }

    async fn update_department(
        &self,
        id: i32,
        new: &NewDepartment,
    ) -> Result<Department, DbError> {
        self.departments().update(id, new).await
    }

    async fn delete_department(&self, id: i32) -> Result<(), DbError> {
        self.departments().delete(id).await?;
        tracing::debug!(id, "department deleted (employees cascaded)");
        Ok(())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, DbError> {
        self.employees().list().await
    }

    async fn get_employee(&self, id: i32) -> Result<Employee, DbError> {
        self.employees().get(id).await
    }

    async fn create_employee(&self, new: &NewEmployee) -> Result<Employee, DbError> {
        let emp = self.employees().create(new).await?;
        tracing::debug!(id = emp.id, department_id = emp.department_id, "employee created");
        Ok(emp)
    }

    async fn update_employee(&self, id: i32, new: &NewEmployee) -> Result<Employee, DbError> {
        self.employees().update(id, new).await
    }

    async fn delete_employee(&self, id: i32) -> Result<(), DbError> {
        self.employees().delete(id).await
    }
}
