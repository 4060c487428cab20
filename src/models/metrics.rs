//! Salary metric records.
//!
//! Metrics are derived from the full roster on every request and are never
//! stored. Amounts serialize as JSON numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Salary statistics for one country group.
///
/// # Example
///
/// ```
/// use roster_engine::models::CountryMetrics;
/// use rust_decimal::Decimal;
///
/// let metrics = CountryMetrics {
///     country: "India".to_string(),
///     employee_count: 1,
///     min_salary: Decimal::new(40000, 0),
///     max_salary: Decimal::new(40000, 0),
///     avg_salary: Decimal::new(40000, 0),
/// };
/// let json = serde_json::to_value(&metrics).unwrap();
/// assert_eq!(json["employeeCount"], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryMetrics {
    /// The exact country string shared by the group.
    pub country: String,
    /// Number of employees in the group.
    pub employee_count: usize,
    /// Lowest gross salary.
    #[serde(with = "rust_decimal::serde::float")]
    pub min_salary: Decimal,
    /// Highest gross salary.
    #[serde(with = "rust_decimal::serde::float")]
    pub max_salary: Decimal,
    /// Mean gross salary, rounded to two decimal places.
    #[serde(with = "rust_decimal::serde::float")]
    pub avg_salary: Decimal,
}

/// Salary statistics for one job-title group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobTitleMetrics {
    /// The exact job title shared by the group.
    pub job_title: String,
    /// Number of employees in the group.
    pub employee_count: usize,
    /// Mean gross salary, rounded to two decimal places.
    #[serde(with = "rust_decimal::serde::float")]
    pub avg_salary: Decimal,
}
