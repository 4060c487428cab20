//! Request types for the roster API.
//!
//! This module defines the JSON body accepted by the create and update
//! endpoints and the raw query parameters of the listing endpoint, together
//! with their conversions into domain types.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, EmployeeDraft, RosterQuery, SortSpec};

/// Request body for `POST /employees` and `PUT /employees/{id}`.
///
/// Every field is optional at the parsing stage so that missing fields are
/// reported by the validator with its own messages. `salary` must be a JSON
/// number; any other JSON type is treated as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    /// The employee's full name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// The employee's job title.
    #[serde(default)]
    pub job_title: Option<String>,
    /// The employee's country.
    #[serde(default)]
    pub country: Option<String>,
    /// Gross salary as a JSON number.
    #[serde(default)]
    pub salary: Option<serde_json::Value>,
}

impl From<EmployeeRequest> for EmployeeDraft {
    fn from(req: EmployeeRequest) -> Self {
        EmployeeDraft {
            full_name: req.full_name.unwrap_or_default(),
            job_title: req.job_title.unwrap_or_default(),
            country: req.country.unwrap_or_default(),
            salary: req.salary.as_ref().and_then(json_number_to_decimal),
        }
    }
}

fn json_number_to_decimal(value: &serde_json::Value) -> Option<Decimal> {
    let serde_json::Value::Number(number) = value else {
        return None;
    };
    let number = number.to_string();
    Decimal::from_str(&number)
        .or_else(|_| Decimal::from_scientific(&number))
        .ok()
}

/// Raw query parameters for `GET /employees`.
///
/// All values arrive as optional strings and are normalized into a
/// [`RosterQuery`]; nothing here can make the request fail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// One-based page number.
    pub page: Option<String>,
    /// Page size.
    pub limit: Option<String>,
    /// Free-text search term.
    pub search: Option<String>,
    /// Exact country filter.
    pub country: Option<String>,
    /// Exact job title filter.
    pub job_title: Option<String>,
    /// Inclusive minimum salary.
    pub min_salary: Option<String>,
    /// Inclusive maximum salary.
    pub max_salary: Option<String>,
    /// Sort field key.
    pub sort_by: Option<String>,
    /// Sort direction key.
    pub sort_order: Option<String>,
}

impl From<ListParams> for RosterQuery {
    fn from(params: ListParams) -> Self {
        let page = parse_int(params.page.as_deref()).unwrap_or(i64::from(DEFAULT_PAGE));
        let limit = parse_int(params.limit.as_deref()).unwrap_or(i64::from(DEFAULT_PAGE_SIZE));

        RosterQuery::new(page, limit)
            .with_search(params.search.unwrap_or_default())
            .with_country(params.country.unwrap_or_default())
            .with_job_title(params.job_title.unwrap_or_default())
            .with_salary_range(
                parse_decimal(params.min_salary.as_deref()),
                parse_decimal(params.max_salary.as_deref()),
            )
            .with_sort(SortSpec::resolve(
                params.sort_by.as_deref(),
                params.sort_order.as_deref(),
            ))
    }
}

fn parse_int(value: Option<&str>) -> Option<i64> {
    value?.trim().parse().ok()
}

fn parse_decimal(value: Option<&str>) -> Option<Decimal> {
    Decimal::from_str(value?.trim()).ok()
}
