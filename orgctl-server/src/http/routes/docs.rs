//! Interactive API documentation
//!
//! `/` redirects to `/docs`, a Swagger UI page that renders `/openapi.json`.

use axum::{
    response::{Html, Redirect},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

const DOCS_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>orgctl API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({ url: "/openapi.json", dom_id: "#swagger-ui" });
  </script>
</body>
</html>
"##;

/// GET /
async fn root() -> Redirect {
    Redirect::temporary("/docs")
}

/// GET /docs
async fn docs_page() -> Html<&'static str> {
    Html(DOCS_PAGE)
}

/// GET /openapi.json
async fn openapi() -> Json<Value> {
    Json(openapi_document())
}

fn error_ref() -> Value {
    json!({ "$ref": "#/components/schemas/Error" })
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": error_ref() } }
    })
}

/// Path items for one resource group (`/departments`, `/employees`).
fn resource_paths(tag: &str, singular: &str, schema: &str, input: &str) -> (Value, Value) {
    let record = json!({ "$ref": format!("#/components/schemas/{schema}") });
    let body = json!({
        "required": true,
        "content": { "application/json": { "schema": { "$ref": format!("#/components/schemas/{input}") } } }
    });
    let message = json!({
        "description": "Success",
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Message" } } }
    });
    let id_param = json!([{
        "name": "id", "in": "path", "required": true,
        "schema": { "type": "integer", "format": "int32" }
    }]);

    let collection = json!({
        "get": {
            "tags": [tag],
            "summary": format!("List all {tag}"),
            "responses": {
                "200": {
                    "description": "All records in id order",
                    "content": { "application/json": { "schema": { "type": "array", "items": record } } }
                }
            }
        },
        "post": {
            "tags": [tag],
            "summary": format!("Create a {singular}"),
            "requestBody": body,
            "responses": {
                "201": {
                    "description": "Created record including its generated id",
                    "content": { "application/json": { "schema": record } }
                },
                "409": error_response("Referenced department does not exist"),
                "422": error_response("Invalid body"),
                "500": error_response("Store failure")
            }
        }
    });

    let item = json!({
        "parameters": id_param,
        "get": {
            "tags": [tag],
            "summary": format!("Get a {singular} by id"),
            "responses": {
                "200": { "description": "Record", "content": { "application/json": { "schema": record } } },
                "404": error_response("No record with this id")
            }
        },
        "put": {
            "tags": [tag],
            "summary": format!("Overwrite a {singular}"),
            "requestBody": body,
            "responses": {
                "200": message,
                "404": error_response("No record with this id"),
                "409": error_response("Referenced department does not exist"),
                "422": error_response("Invalid body")
            }
        },
        "delete": {
            "tags": [tag],
            "summary": format!("Delete a {singular}"),
            "responses": {
                "200": message,
                "404": error_response("No record with this id")
            }
        }
    });

    (collection, item)
}

/// OpenAPI 3 description of every route.
pub fn openapi_document() -> Value {
    let (departments, department) =
        resource_paths("departments", "department", "Department", "DepartmentBody");
    let (employees, employee) =
        resource_paths("employees", "employee", "Employee", "EmployeeBody");

    let text = |max: u32| json!({ "type": "string", "minLength": 1, "maxLength": max });
    let int = json!({ "type": "integer", "format": "int32" });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "orgctl",
            "description": "Departments and their employees",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/departments": departments,
            "/departments/{id}": department,
            "/employees": employees,
            "/employees/{id}": employee,
            "/health": {
                "get": {
                    "summary": "Store connectivity check",
                    "responses": {
                        "200": { "description": "Store reachable" },
                        "503": { "description": "Store unreachable" }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Department": {
                    "type": "object",
                    "required": ["id", "name", "location"],
                    "properties": { "id": int, "name": text(100), "location": text(100) }
                },
                "DepartmentBody": {
                    "type": "object",
                    "required": ["name", "location"],
                    "properties": { "id": int, "name": text(100), "location": text(100) }
                },
                "Employee": {
                    "type": "object",
                    "required": ["id", "name", "email", "phone", "department_id"],
                    "properties": {
                        "id": int, "name": text(100), "email": text(100),
                        "phone": text(20), "department_id": int
                    }
                },
                "EmployeeBody": {
                    "type": "object",
                    "required": ["name", "email", "phone", "department_id"],
                    "properties": {
                        "id": int, "name": text(100), "email": text(100),
                        "phone": text(20), "department_id": int
                    }
                },
                "Message": {
                    "type": "object",
                    "required": ["message"],
                    "properties": { "message": { "type": "string" } }
                },
                "Error": {
                    "type": "object",
                    "required": ["error", "message"],
                    "properties": {
                        "error": { "type": "string" },
                        "message": { "type": "string" }
                    }
                }
            }
        }
    })
}

/// Documentation routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/docs", get(docs_page))
        .route("/openapi.json", get(openapi))
}
