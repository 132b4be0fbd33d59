//! Employee handlers
//!
//! Endpoints for employee CRUD under `/api/employees`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::domain::entities::{Employee, EmployeeChanges, EmployeeId, NewEmployee};
use crate::domain::ports::EmployeeRepository;
use crate::error::AppError;
use crate::AppState;

/// Body returned by a successful delete
pub const DELETED_MESSAGE: &str = "Employee deleted successfully";

/// Query parameters for searching by name
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEmployeesQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// POST /api/employees
///
/// Create a new employee. Returns 409 if the email is already taken.
pub async fn create_employee<ER: EmployeeRepository + 'static>(
    State(state): State<AppState<ER>>,
    Json(request): Json<NewEmployee>,
) -> Result<(StatusCode, Json<Employee>), AppError> {
    let employee = state.employee_service.create(&request).await?;

    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/employees
///
/// List all employees.
pub async fn list_employees<ER: EmployeeRepository + 'static>(
    State(state): State<AppState<ER>>,
) -> Result<Json<Vec<Employee>>, AppError> {
    let employees = state.employee_service.list().await?;

    Ok(Json(employees))
}

/// GET /api/employees/:id
///
/// Get a single employee. Absent employees yield 404 with an empty body.
pub async fn get_employee<ER: EmployeeRepository + 'static>(
    State(state): State<AppState<ER>>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, AppError> {
    let employee = state
        .employee_service
        .get_by_id(EmployeeId(id))
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(employee))
}

/// GET /api/employees/search?firstName=..&lastName=..
///
/// Find an employee by exact first and last name.
pub async fn search_employees<ER: EmployeeRepository + 'static>(
    State(state): State<AppState<ER>>,
    Query(query): Query<SearchEmployeesQuery>,
) -> Result<Json<Employee>, AppError> {
    let (Some(first_name), Some(last_name)) = (query.first_name, query.last_name) else {
        return Err(AppError::BadRequest(
            "firstName and lastName are both required".to_string(),
        ));
    };

    let employee = state
        .employee_service
        .find_by_full_name(&first_name, &last_name)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(employee))
}

/// PUT /api/employees/:id
///
/// Replace first name, last name and email of an existing employee.
pub async fn update_employee<ER: EmployeeRepository + 'static>(
    State(state): State<AppState<ER>>,
    Path(id): Path<i64>,
    Json(request): Json<EmployeeChanges>,
) -> Result<Json<Employee>, AppError> {
    let existing = state
        .employee_service
        .get_by_id(EmployeeId(id))
        .await?
        .ok_or(AppError::NotFound)?;

    let employee = state.employee_service.update(existing, request).await?;

    Ok(Json(employee))
}

/// DELETE /api/employees/:id
///
/// Delete an employee. Succeeds whether or not the employee existed.
/// The body is the plain-text `DELETED_MESSAGE`.
pub async fn delete_employee<ER: EmployeeRepository + 'static>(
    State(state): State<AppState<ER>>,
    Path(id): Path<i64>,
) -> Result<&'static str, AppError> {
    state.employee_service.delete(EmployeeId(id)).await?;

    Ok(DELETED_MESSAGE)
}
