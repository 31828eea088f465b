use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    extractors::CurrentActor,
    models::{CreateEmployeeInput, Employee, EmployeeMutationResponse, UpdateEmployeeInput},
    AppResult, AppState,
};

/// GET /api/employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "Employees visible to the actor (admins see all, supervisors their own)", body = Vec<Employee>),
        (status = 401, description = "Not logged in")
    ),
    tag = "employees"
)]
pub async fn get_employees(
    State(state): State<Arc<AppState>>,
    actor: CurrentActor,
) -> AppResult<Json<Vec<Employee>>> {
    Ok(Json(state.directory.visible_employees(&actor.0)))
}

/// POST /api/employees
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployeeInput,
    responses(
        (status = 200, description = "Employee created", body = EmployeeMutationResponse),
        (status = 403, description = "Admin role required"),
        (status = 422, description = "Duplicate tech number or unknown supervisor display name")
    ),
    tag = "employees"
)]
pub async fn create_employee(
    State(state): State<Arc<AppState>>,
    actor: CurrentActor,
    Json(input): Json<CreateEmployeeInput>,
) -> AppResult<Json<EmployeeMutationResponse>> {
    let id = state.directory.create_employee(&actor.0, input).await?;
    Ok(Json(EmployeeMutationResponse {
        success: true,
        id: Some(id),
        message: Some("Employee created".to_string()),
    }))
}

/// PUT /api/employees/{id}
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    request_body = UpdateEmployeeInput,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeMutationResponse),
        (status = 400, description = "No fields to update"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Employee not found"),
        (status = 422, description = "Duplicate tech number or unknown supervisor display name")
    ),
    tag = "employees"
)]
pub async fn update_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    actor: CurrentActor,
    Json(input): Json<UpdateEmployeeInput>,
) -> AppResult<Json<EmployeeMutationResponse>> {
    state.directory.update_employee(&actor.0, id, input).await?;
    Ok(Json(EmployeeMutationResponse {
        success: true,
        id: Some(id),
        message: Some("Employee updated".to_string()),
    }))
}

/// DELETE /api/employees/{id}
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee deleted", body = EmployeeMutationResponse),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Employee not found")
    ),
    tag = "employees"
)]
pub async fn delete_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    actor: CurrentActor,
) -> AppResult<Json<EmployeeMutationResponse>> {
    state.directory.delete_employee(&actor.0, id).await?;
    Ok(Json(EmployeeMutationResponse {
        success: true,
        id: None,
        message: Some("Employee deleted".to_string()),
    }))
}
