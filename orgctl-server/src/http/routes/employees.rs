//! Employee endpoints, mounted under `/employees`

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};

use super::MessageResponse;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson};
use crate::http::server::AppState;
use crate::models::{Employee, EmployeeBody, NewEmployee};

const RESOURCE: &str = "Employee";

fn not_found(id: i32) -> ApiError {
    ApiError::NotFound {
        resource: RESOURCE,
        id: id.to_string(),
    }
}

/// GET /employees
async fn list_employees(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    Ok(Json(state.employees.list().await?))
}

/// GET /employees/{id}
async fn get_employee(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Employee>, ApiError> {
    let id = id.resolve(RESOURCE)?;
    state
        .employees
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// POST /employees - 409 if `department_id` names no department
async fn create_employee(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<EmployeeBody>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let new = NewEmployee::try_from(body)?;
    let emp = state.employees.create(&new).await?;
    tracing::info!(id = emp.id, department_id = emp.department_id, "Employee created");

    Ok((StatusCode::CREATED, Json(emp)))
}

/// PUT /employees/{id}
async fn update_employee(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    ValidJson(body): ValidJson<EmployeeBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = id.resolve(RESOURCE)?;
    let new = NewEmployee::try_from(body)?;
    if !state.employees.update(id, &new).await? {
        return Err(not_found(id));
    }

    Ok(Json(MessageResponse::new("Employee updated successfully")))
}

/// DELETE /employees/{id}
async fn delete_employee(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = id.resolve(RESOURCE)?;
    if !state.employees.delete(id).await? {
        return Err(not_found(id));
    }

    Ok(Json(MessageResponse::new("Employee deleted.")))
}

/// Employee routes (`POST /employees/employees` kept for older clients)
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route("/employees/", get(list_employees).post(create_employee))
        .route("/employees/employees", post(create_employee))
        .route(
            "/employees/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}
