//! HTTP request handlers for the roster API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    CountryMetrics, Employee, EmployeeView, JobTitleMetrics, RosterPage, RosterQuery,
};
use crate::roster::{
    SalaryBreakdown, metrics_by_country, metrics_by_job_title, run_query, salary_breakdown,
    validate_employee,
};
use crate::store::EmployeeStore;

use super::request::{EmployeeRequest, ListParams};
use super::response::{ApiErrorResponse, MessageResponse};
use super::state::AppState;

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route("/employees/metrics/country", get(country_metrics))
        .route("/employees/metrics/job-title", get(job_title_metrics))
        .route(
            "/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/employees/:id/salary", get(get_salary_breakdown))
        .with_state(state)
}

/// Builds an error mapper that logs the failure under the request's
/// correlation id.
fn reject(correlation_id: Uuid, failure: &'static str) -> impl FnOnce(EngineError) -> ApiErrorResponse {
    move |err| {
        match &err {
            EngineError::Validation(_) | EngineError::InvalidId { .. } | EngineError::NotFound { .. } => {
                warn!(correlation_id = %correlation_id, error = %err, "Request rejected");
            }
            _ => {
                error!(correlation_id = %correlation_id, error = %err, "{}", failure);
            }
        }
        ApiErrorResponse::from_engine_error(err, failure)
    }
}

/// Unwraps a JSON body, turning extractor rejections into 400 responses.
fn read_payload(
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> ApiResult<EmployeeRequest> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let message = match rejection {
                JsonRejection::JsonDataError(err) => err.body_text(),
                JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
                JsonRejection::MissingJsonContentType(_) => {
                    "Content-Type must be application/json".to_string()
                }
                _ => "Failed to parse request body".to_string(),
            };
            warn!(correlation_id = %correlation_id, error = %message, "Malformed request body");
            Err(ApiErrorResponse::bad_request(message))
        }
    }
}

/// Reads the leading integer of an identifier path segment.
///
/// Leading whitespace and a sign are allowed and anything after the digits
/// is ignored, so `12abc` is 12 and `1.5` is 1. A segment with no leading
/// digit is invalid. Magnitudes past the `i64` range saturate and so never
/// match a record.
fn parse_id(raw: &str) -> EngineResult<i64> {
    let text = raw.trim_start();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(EngineError::InvalidId {
            raw: raw.to_string(),
        });
    }

    let magnitude: i64 = unsigned[..digits].parse().unwrap_or(i64::MAX);
    Ok(if negative { -magnitude } else { magnitude })
}

async fn fetch_employee(store: &dyn EmployeeStore, id: i64) -> EngineResult<Employee> {
    store
        .find_by_id(id)
        .await?
        .ok_or(EngineError::NotFound { id })
}

async fn insert_employee(
    store: &dyn EmployeeStore,
    request: EmployeeRequest,
) -> EngineResult<Employee> {
    let employee = validate_employee(&request.into())?;
    store.insert(employee).await
}

async fn replace_employee(
    store: &dyn EmployeeStore,
    id: i64,
    request: EmployeeRequest,
) -> EngineResult<Employee> {
    let employee = validate_employee(&request.into())?;
    store
        .replace(id, employee)
        .await?
        .ok_or(EngineError::NotFound { id })
}

async fn remove_employee(store: &dyn EmployeeStore, id: i64) -> EngineResult<()> {
    if store.remove(id).await? {
        Ok(())
    } else {
        Err(EngineError::NotFound { id })
    }
}

/// Handler for GET /employees.
///
/// Runs the search, filter, sort and paginate pipeline over the full roster.
async fn list_employees(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<RosterPage>> {
    let correlation_id = Uuid::new_v4();
    let query = RosterQuery::from(params);
    info!(
        correlation_id = %correlation_id,
        page = query.page(),
        limit = query.page_size(),
        "Processing roster query"
    );

    let start_time = Instant::now();
    let records = state
        .store()
        .find_all()
        .await
        .map_err(reject(correlation_id, "Failed to fetch employees"))?;
    let page = run_query(&records, &query);

    info!(
        correlation_id = %correlation_id,
        total = page.pagination.total,
        returned = page.data.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Roster query completed"
    );
    Ok(Json(page))
}

/// Handler for POST /employees.
async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<EmployeeView>)> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create employee request");

    let request = read_payload(payload, correlation_id)?;
    let employee = insert_employee(state.store(), request)
        .await
        .map_err(reject(correlation_id, "Failed to create employee"))?;

    info!(correlation_id = %correlation_id, employee_id = employee.id, "Employee created");
    Ok((StatusCode::CREATED, Json(EmployeeView::from(&employee))))
}

/// Handler for GET /employees/{id}.
async fn get_employee(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<EmployeeView>> {
    let correlation_id = Uuid::new_v4();
    let failure = "Failed to fetch employee";

    let id = parse_id(&raw_id).map_err(reject(correlation_id, failure))?;
    let employee = fetch_employee(state.store(), id)
        .await
        .map_err(reject(correlation_id, failure))?;

    info!(correlation_id = %correlation_id, employee_id = id, "Employee fetched");
    Ok(Json(EmployeeView::from(&employee)))
}

/// Handler for PUT /employees/{id}.
///
/// Replaces all four mutable fields; partial updates are rejected by the
/// validator like any other incomplete record.
async fn update_employee(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> ApiResult<Json<EmployeeView>> {
    let correlation_id = Uuid::new_v4();
    let failure = "Failed to update employee";

    let id = parse_id(&raw_id).map_err(reject(correlation_id, failure))?;
    let request = read_payload(payload, correlation_id)?;
    let employee = replace_employee(state.store(), id, request)
        .await
        .map_err(reject(correlation_id, failure))?;

    info!(correlation_id = %correlation_id, employee_id = id, "Employee updated");
    Ok(Json(EmployeeView::from(&employee)))
}

/// Handler for DELETE /employees/{id}.
async fn delete_employee(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let correlation_id = Uuid::new_v4();
    let failure = "Failed to delete employee";

    let id = parse_id(&raw_id).map_err(reject(correlation_id, failure))?;
    remove_employee(state.store(), id)
        .await
        .map_err(reject(correlation_id, failure))?;

    info!(correlation_id = %correlation_id, employee_id = id, "Employee deleted");
    Ok(Json(MessageResponse {
        message: "Employee deleted successfully".to_string(),
    }))
}

/// Handler for GET /employees/{id}/salary.
///
/// Returns gross, withholding and net salary as two-decimal strings.
async fn get_salary_breakdown(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<SalaryBreakdown>> {
    let correlation_id = Uuid::new_v4();
    let failure = "Failed to fetch employee";

    let id = parse_id(&raw_id).map_err(reject(correlation_id, failure))?;
    let employee = fetch_employee(state.store(), id)
        .await
        .map_err(reject(correlation_id, failure))?;

    Ok(Json(salary_breakdown(employee.salary, &employee.country)))
}

/// Handler for GET /employees/metrics/country.
async fn country_metrics(State(state): State<AppState>) -> ApiResult<Json<Vec<CountryMetrics>>> {
    let correlation_id = Uuid::new_v4();
    let failure = "Failed to fetch country metrics";
    let records = state
        .store()
        .find_all()
        .await
        .map_err(reject(correlation_id, failure))?;

    let metrics = metrics_by_country(&records).map_err(reject(correlation_id, failure))?;
    info!(correlation_id = %correlation_id, groups = metrics.len(), "Country metrics computed");
    Ok(Json(metrics))
}

/// Handler for GET /employees/metrics/job-title.
async fn job_title_metrics(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<JobTitleMetrics>>> {
    let correlation_id = Uuid::new_v4();
    let failure = "Failed to fetch job title metrics";
    let records = state
        .store()
        .find_all()
        .await
        .map_err(reject(correlation_id, failure))?;

    let metrics = metrics_by_job_title(&records).map_err(reject(correlation_id, failure))?;
    info!(correlation_id = %correlation_id, groups = metrics.len(), "Job title metrics computed");
    Ok(Json(metrics))
}
