//! Table declarations for departments and employees
//!
//! Idempotent (`IF NOT EXISTS`); safe to run on every startup.

use sqlx::PgPool;

/// Create the `department` and `employee` tables if they are missing.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring department/employee tables exist");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS department (
            id SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            location VARCHAR(100) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Cascade keeps employees from outliving their department
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employee (
            id SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            email VARCHAR(100) NOT NULL,
            phone VARCHAR(20) NOT NULL,
            department_id INTEGER NOT NULL
                REFERENCES department(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_employee_department_id ON employee(department_id)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
