//! Employee roster engine.
//!
//! This crate provides an employee roster service: CRUD over employee
//! records, a search, filter, sort and paginate query pipeline, per-country
//! withholding (TDS) and net salary calculation, and salary metrics grouped
//! by country and job title.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod roster;
pub mod store;
