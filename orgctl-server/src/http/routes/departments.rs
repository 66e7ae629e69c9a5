//! Department endpoints, mounted under `/departments`

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};

use super::MessageResponse;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson};
use crate::http::server::AppState;
use crate::models::{Department, DepartmentBody, NewDepartment};

const RESOURCE: &str = "Department";

fn not_found(id: i32) -> ApiError {
    ApiError::NotFound {
        resource: RESOURCE,
        id: id.to_string(),
    }
}

/// GET /departments - list all departments
async fn list_departments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Department>>, ApiError> {
    Ok(Json(state.departments.list().await?))
}

/// GET /departments/{id}
async fn get_department(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Department>, ApiError> {
    let id = id.resolve(RESOURCE)?;
    state
        .departments
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// POST /departments - create a department, returning it with its id
async fn create_department(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<DepartmentBody>,
) -> Result<(StatusCode, Json<Department>), ApiError> {
    let new = NewDepartment::try_from(body)?;
    let dept = state.departments.create(&new).await?;
    tracing::info!(id = dept.id, "Department created");

    Ok((StatusCode::CREATED, Json(dept)))
}

/// PUT /departments/{id} - overwrite name and location
async fn update_department(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    ValidJson(body): ValidJson<DepartmentBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = id.resolve(RESOURCE)?;
    let new = NewDepartment::try_from(body)?;
    if !state.departments.update(id, &new).await? {
        return Err(not_found(id));
    }

    Ok(Json(MessageResponse::new("Department updated successfully")))
}

/// DELETE /departments/{id} - remove the department and its employees
async fn delete_department(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = id.resolve(RESOURCE)?;
    if !state.departments.delete(id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Department deleted");

    Ok(Json(MessageResponse::new("Department deleted.")))
}

/// Department routes.
///
/// `POST /departments/departments` is kept for clients of the older API
/// layout.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/departments", get(list_departments).post(create_department))
        .route("/departments/", get(list_departments).post(create_department))
        .route("/departments/departments", post(create_department))
        .route(
            "/departments/{id}",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
}
