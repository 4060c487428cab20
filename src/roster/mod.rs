//! Roster logic for the roster engine.
//!
//! This module contains the pure functions behind the service: withholding
//! and net salary calculation, employee validation, the search, filter, sort
//! and paginate query pipeline, and per-country and per-job-title salary
//! aggregation.

mod aggregate;
mod pipeline;
mod validation;
mod withholding;

pub use aggregate::{metrics_by_country, metrics_by_job_title};
pub use pipeline::run_query;
pub use validation::{MAX_SALARY, validate_employee};
pub use withholding::{Jurisdiction, SalaryBreakdown, Withholding, compute_net, salary_breakdown};

pub(crate) use withholding::to_cents;
