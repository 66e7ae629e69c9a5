//! Department repository

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{Department, NewDepartment};

const RESOURCE: &str = "department";

/// Department repository
pub struct DepartmentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> DepartmentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All departments in id order.
    pub async fn list(&self) -> Result<Vec<Department>, DbError> {
        let rows = sqlx::query_as::<_, Department>(
            "SELECT id, name, location FROM department ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get(&self, id: i32) -> Result<Department, DbError> {
        sqlx::query_as::<_, Department>(
            "SELECT id, name, location FROM department WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: RESOURCE,
            id,
        })
    }

    /// Insert a department, returning it with the generated id.
    pub async fn create(&self, new: &NewDepartment) -> Result<Department, DbError> {
        let dept = sqlx::query_as::<_, Department>(
            r#"
            INSERT INTO department (name, location)
            VALUES ($1, $2)
            RETURNING id, name, location
            "#,
        )
        .bind(new.name())
        .bind(new.location())
        .fetch_one(self.pool)
        .await?;

        Ok(dept)
    }

    /// Overwrite both fields of an existing department.
    pub async fn update(&self, id: i32, new: &NewDepartment) -> Result<Department, DbError> {
        sqlx::query_as::<_, Department>(
            r#"
            UPDATE department
            SET name = $2, location = $3
            WHERE id = $1
            RETURNING id, name, location
            "#,
        )
        .bind(id)
        .bind(new.name())
        .bind(new.location())
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: RESOURCE,
            id,
        })
    }

    /// Delete a department. Employees go with it via `ON DELETE CASCADE`.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM department WHERE id = $1")
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
