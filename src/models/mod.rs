//! Core data models for the roster engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod metrics;
mod query;

pub use employee::{Employee, EmployeeDraft, EmployeeView, NewEmployee};
pub use metrics::{CountryMetrics, JobTitleMetrics};
pub use query::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, Pagination, RosterPage, RosterQuery,
    SortDirection, SortField, SortSpec,
};
