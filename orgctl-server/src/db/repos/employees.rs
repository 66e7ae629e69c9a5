//! Employee repository
//!
//! `department_id` is not checked up front; the foreign key decides, and a
//! violation is reported as `DbError::ReferenceViolation`.

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{Employee, NewEmployee};

const RESOURCE: &str = "employee";

/// Employee repository
pub struct EmployeeRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> EmployeeRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Employee>, DbError> {
        let rows = sqlx::query_as::<_, Employee>(
            "SELECT id, name, email, phone, department_id FROM employee ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get(&self, id: i32) -> Result<Employee, DbError> {
        sqlx::query_as::<_, Employee>(
            "SELECT id, name, email, phone, department_id FROM employee WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: RESOURCE,
            id,
        })
    }

    pub async fn create(&self, new: &NewEmployee) -> Result<Employee, DbError> {
        sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employee (name, email, phone, department_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, phone, department_id
            "#,
        )
        .bind(new.name())
        .bind(new.email())
        .bind(new.phone())
        .bind(new.department_id())
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::on_write(e, "department", new.department_id()))
    }

    pub async fn update(&self, id: i32, new: &NewEmployee) -> Result<Employee, DbError> {
        sqlx::query_as::<_, Employee>(
            r#"
            UPDATE employee
            SET name = $2, email = $3, phone = $4, department_id = $5
            WHERE id = $1
            RETURNING id, name, email, phone, department_id
            "#,
        )
        .bind(id)
        .bind(new.name())
        .bind(new.email())
        .bind(new.phone())
        .bind(new.department_id())
        .fetch_optional(self.pool)
        .await
        .map_err(|e| DbError::on_write(e, "department", new.department_id()))?
        .ok_or(DbError::NotFound {
            resource: RESOURCE,
            id,
        })
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM employee WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: RESOURCE,
                id,
            });
        }

        Ok(())
    }
}
