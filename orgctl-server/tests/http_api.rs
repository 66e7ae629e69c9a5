//! End-to-end HTTP behaviour against the in-memory store

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use orgctl_server::{build_router, AppState, MemoryStore, ServerConfig};

fn app() -> Router {
    let state = Arc::new(AppState::new(Arc::new(MemoryStore::new())));
    build_router(state, &ServerConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_engineering(app: &Router) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/departments",
        Some(json!({"name": "Engineering", "location": "Building A"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn root_redirects_to_docs() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/docs");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (status, body) = send(&app(), Method::GET, "/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["openapi"], "3.0.3");
}

#[tokio::test]
async fn create_then_get_department() {
    let app = app();
    let created = create_engineering(&app).await;
    assert_eq!(created, json!({"id": 1, "name": "Engineering", "location": "Building A"}));

    let (status, fetched) = send(&app, Method::GET, "/departments/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn list_is_empty_then_holds_every_department() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/departments", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    for name in ["Engineering", "Sales", "Support"] {
        send(
            &app,
            Method::POST,
            "/departments",
            Some(json!({"name": name, "location": "HQ"})),
        )
        .await;
    }

    let (_, body) = send(&app, Method::GET, "/departments/", None).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Engineering", "Sales", "Support"]);
}

#[tokio::test]
async fn missing_department_is_404() {
    let (status, body) = send(&app(), Method::GET, "/departments/999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "Department 999999 not found");
}

#[tokio::test]
async fn update_overwrites_fields_and_keeps_id() {
    let app = app();
    create_engineering(&app).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/departments/1",
        Some(json!({"id": 77, "name": "Research", "location": "Building C"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Department updated successfully"}));

    let (_, fetched) = send(&app, Method::GET, "/departments/1", None).await;
    assert_eq!(fetched, json!({"id": 1, "name": "Research", "location": "Building C"}));

    let (status, _) = send(&app, Method::GET, "/departments/77", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_missing_department_is_404() {
    let (status, _) = send(
        &app(),
        Method::PUT,
        "/departments/5",
        Some(json!({"name": "Research", "location": "Building C"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_department_cascades_to_employees() {
    let app = app();
    create_engineering(&app).await;

    let (status, employee) = send(
        &app,
        Method::POST,
        "/employees",
        Some(json!({
            "name": "Ana",
            "email": "ana@x.com",
            "phone": "555-0100",
            "department_id": 1
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(employee["id"], 1);

    let (status, body) = send(&app, Method::DELETE, "/departments/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Department deleted."}));

    let (status, _) = send(&app, Method::GET, "/employees/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, all) = send(&app, Method::GET, "/employees", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn repeated_delete_is_always_404_after_first() {
    let app = app();
    create_engineering(&app).await;

    let (status, _) = send(&app, Method::DELETE, "/departments/1", None).await;
    assert_eq!(status, StatusCode::OK);

    for _ in 0..2 {
        let (status, _) = send(&app, Method::DELETE, "/departments/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn employee_with_unknown_department_is_reference_violation() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/employees",
        Some(json!({
            "name": "Ana",
            "email": "ana@x.com",
            "phone": "555-0100",
            "department_id": 42
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "reference_violation");

    let (_, all) = send(&app, Method::GET, "/employees", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn employee_update_and_delete_messages() {
    let app = app();
    create_engineering(&app).await;
    send(
        &app,
        Method::POST,
        "/employees/employees",
        Some(json!({
            "name": "Ana",
            "email": "ana@x.com",
            "phone": "555-0100",
            "department_id": 1
        })),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/employees/1",
        Some(json!({
            "name": "Ana Maria",
            "email": "ana@x.com",
            "phone": "555-0101",
            "department_id": 1
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Employee updated successfully"}));

    let (_, fetched) = send(&app, Method::GET, "/employees/1", None).await;
    assert_eq!(fetched["name"], "Ana Maria");
    assert_eq!(fetched["phone"], "555-0101");

    let (status, body) = send(&app, Method::DELETE, "/employees/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Employee deleted."}));
}

#[tokio::test]
async fn employee_update_with_unknown_department_is_reference_violation() {
    let app = app();
    create_engineering(&app).await;
    let ana = json!({
        "name": "Ana",
        "email": "ana@x.com",
        "phone": "555-0100",
        "department_id": 1
    });
    send(&app, Method::POST, "/employees", Some(ana)).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/employees/1",
        Some(json!({
            "name": "Ana Maria",
            "email": "ana@x.com",
            "phone": "555-0101",
            "department_id": 99
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "reference_violation");

    let (_, fetched) = send(&app, Method::GET, "/employees/1", None).await;
    assert_eq!(fetched["name"], "Ana");
    assert_eq!(fetched["department_id"], 1);
}

#[tokio::test]
async fn ids_beyond_integer_range_are_404() {
    let app = app();
    create_engineering(&app).await;

    for method in [Method::GET, Method::DELETE] {
        let (status, body) = send(&app, method, "/departments/9999999999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Department 9999999999 not found");
    }

    let (status, _) = send(
        &app,
        Method::PUT,
        "/employees/-9999999999",
        Some(json!({
            "name": "Ana",
            "email": "ana@x.com",
            "phone": "555-0100",
            "department_id": 1
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn nul_characters_are_rejected() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/departments",
        Some(json!({"name": "Eng\0ineering", "location": "Building A"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "name cannot contain NUL characters");

    let (_, all) = send(&app, Method::GET, "/departments", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn legacy_create_path_is_accepted() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/departments/departments",
        Some(json!({"name": "Engineering", "location": "Building A"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn invalid_input_is_422() {
    let app = app();

    // missing field
    let (status, body) = send(&app, Method::POST, "/departments", Some(json!({"name": "Ops"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");

    // too long
    let (status, _) = send(
        &app,
        Method::POST,
        "/departments",
        Some(json!({"name": "x".repeat(101), "location": "HQ"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // non-integer id
    let (status, body) = send(&app, Method::GET, "/employees/abc", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "invalid id 'abc': expected an integer");

    // not JSON at all
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/departments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn health_reports_store_up() {
    let (status, body) = send(&app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "up");
}
