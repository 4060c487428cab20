//! Configuration types for the roster service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::EmployeeDraft;

/// Service settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSettings {
    /// Service name, used in startup logs.
    pub name: String,
    /// Socket address to listen on (e.g., "127.0.0.1:3000").
    pub bind: String,
}

/// Structure of `service.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Service settings.
    pub service: ServiceSettings,
}

/// One employee in `seed.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedEmployee {
    /// Full name.
    #[serde(default)]
    pub full_name: String,
    /// Job title.
    #[serde(default)]
    pub job_title: String,
    /// Country.
    #[serde(default)]
    pub country: String,
    /// Gross salary.
    #[serde(default)]
    pub salary: Option<Decimal>,
}

impl From<SeedEmployee> for EmployeeDraft {
    fn from(seed: SeedEmployee) -> Self {
        EmployeeDraft {
            full_name: seed.full_name,
            job_title: seed.job_title,
            country: seed.country,
            salary: seed.salary,
        }
    }
}

/// Structure of `seed.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
    /// Employees inserted at startup, in order.
    #[serde(default)]
    pub employees: Vec<SeedEmployee>,
}
