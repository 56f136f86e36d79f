//! Employee endpoints
//!
//! - POST   /api/employees       -> 201 + created record
//! - GET    /api/employees       -> 200 + array
//! - GET    /api/employees/{id}  -> 200 + record, or empty 404
//! - PUT    /api/employees/{id}  -> 200 + updated record, or empty 404
//! - DELETE /api/employees/{id}  -> 200 + confirmation text, always

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{Employee, NewEmployee};

/// Body returned by DELETE
pub const DELETED_MESSAGE: &str = "Employee deleted successfully!.";

/// POST /api/employees
async fn create_employee(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewEmployee>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let employee = state.employees.create_employee(req).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/employees
async fn list_employees(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    Ok(Json(state.employees.list_employees().await?))
}

/// GET /api/employees/{id}
async fn get_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    Ok(found_or_404(state.employees.get_employee(id).await?))
}

/// PUT /api/employees/{id}
async fn update_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(patch): Json<NewEmployee>,
) -> Result<Response, ApiError> {
    Ok(found_or_404(state.employees.update_employee(id, patch).await?))
}

/// DELETE /api/employees/{id}
async fn delete_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, &'static str), ApiError> {
    state.employees.delete_employee(id).await?;
    Ok((StatusCode::OK, DELETED_MESSAGE))
}

fn found_or_404(employee: Option<Employee>) -> Response {
    match employee {
        Some(employee) => Json(employee).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Employee routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/employees", get(list_employees).post(create_employee))
        .route(
            "/api/employees/{id}",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
}
