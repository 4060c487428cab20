//! Employee model and related types.
//!
//! This module defines the stored [`Employee`] record, the validated
//! [`NewEmployee`] input accepted by the store, the unvalidated
//! [`EmployeeDraft`] handed to the validator, and the [`EmployeeView`]
//! returned to API callers with its net salary attached.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::roster::compute_net;

/// Represents an employee record as held by the store.
///
/// The identifier and creation timestamp are assigned by the store and never
/// change. Net salary is not stored; see [`EmployeeView`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier assigned by the store.
    pub id: i64,
    /// The employee's full name.
    pub full_name: String,
    /// The employee's job title.
    pub job_title: String,
    /// Free-form country name, used for withholding and metrics.
    pub country: String,
    /// Gross salary, two decimal places.
    pub salary: Decimal,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// The mutable fields of an employee, after validation.
///
/// Used for both inserts and full replacements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// The employee's full name.
    pub full_name: String,
    /// The employee's job title.
    pub job_title: String,
    /// Free-form country name.
    pub country: String,
    /// Gross salary, strictly positive.
    pub salary: Decimal,
}

/// A candidate employee record that has not been validated yet.
///
/// Missing text fields are represented as empty strings. A salary that was
/// absent or not a number is `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDraft {
    /// Candidate full name.
    pub full_name: String,
    /// Candidate job title.
    pub job_title: String,
    /// Candidate country.
    pub country: String,
    /// Candidate gross salary.
    pub salary: Option<Decimal>,
}

/// An employee as returned to callers, annotated with net salary.
///
/// # Example
///
/// ```
/// use roster_engine::models::{Employee, EmployeeView};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: 1,
///     full_name: "John Doe".to_string(),
///     job_title: "Software Engineer".to_string(),
///     country: "India".to_string(),
///     salary: Decimal::new(5000000, 2),
///     created_at: Utc::now(),
/// };
///
/// let view = EmployeeView::from(&employee);
/// assert_eq!(view.net_salary, Decimal::new(45000, 0));
/// assert_eq!(view.salary, employee.salary);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeView {
    /// Unique identifier assigned by the store.
    pub id: i64,
    /// The employee's full name.
    pub full_name: String,
    /// The employee's job title.
    pub job_title: String,
    /// Free-form country name.
    pub country: String,
    /// Stored gross salary.
    pub salary: Decimal,
    /// Gross salary minus withholding for the employee's country.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_salary: Decimal,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl From<&Employee> for EmployeeView {
    fn from(employee: &Employee) -> Self {
        let withholding = compute_net(employee.salary, &employee.country);
        EmployeeView {
            id: employee.id,
            full_name: employee.full_name.clone(),
            job_title: employee.job_title.clone(),
            country: employee.country.clone(),
            salary: employee.salary,
            net_salary: withholding.net,
            created_at: employee.created_at,
        }
    }
}
