use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;

use employee_registry_core::{Employee, EmployeeInput};

use crate::api_error::ApiError;
use crate::query_types::FullNameQuery;
use crate::AppState;

/// 204 with no body when nothing matched, 200 with the list otherwise.
fn list_response(employees: Vec<Employee>) -> Response {
    if employees.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        Json(employees).into_response()
    }
}

pub async fn list_employees(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let employees = state.employee_service.list_all().await?;
    Ok(list_response(employees))
}

pub async fn get_employee(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Employee>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.employee_service.get_by_id(id).await?))
}

pub async fn create_employee(
    State(state): State<Arc<AppState>>,
    body: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let Json(input) = body?;
    let created = state.employee_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_employee(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<Json<Employee>, ApiError> {
    let Path(id) = id?;
    let Json(input) = body?;
    Ok(Json(state.employee_service.update(id, input).await?))
}

pub async fn delete_employee(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<String, ApiError> {
    let Path(id) = id?;
    Ok(state.employee_service.delete(id).await?)
}

pub async fn create_batch(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Vec<EmployeeInput>>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<Employee>>), ApiError> {
    let Json(inputs) = body?;
    let created = state.employee_service.bulk_create(inputs).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn search_by_email(
    State(state): State<Arc<AppState>>,
    email: Result<Path<String>, PathRejection>,
) -> Result<Json<Employee>, ApiError> {
    let Path(email) = email?;
    Ok(Json(state.employee_service.get_by_email(&email).await?))
}

pub async fn search_first_name_containing(
    State(state): State<Arc<AppState>>,
    query: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(query) = query?;
    Ok(list_response(state.employee_service.search_by_first_name(&query).await?))
}

pub async fn search_last_name_containing(
    State(state): State<Arc<AppState>>,
    query: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(query) = query?;
    Ok(list_response(state.employee_service.search_by_last_name(&query).await?))
}

pub async fn search_by_first_name(
    State(state): State<Arc<AppState>>,
    first_name: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(first_name) = first_name?;
    Ok(list_response(state.employee_service.find_by_first_name(&first_name).await?))
}

pub async fn search_by_full_name(
    State(state): State<Arc<AppState>>,
    query: Result<Query<FullNameQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    let (first_name, last_name) = query.into_parts()?;
    Ok(list_response(state.employee_service.search_by_full_name(&first_name, &last_name).await?))
}

pub async fn count_employees(State(state): State<Arc<AppState>>) -> Result<Json<u64>, ApiError> {
    Ok(Json(state.employee_service.count().await?))
}

pub async fn unique_first_names(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.employee_service.unique_first_names().await?))
}
