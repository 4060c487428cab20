//! Error types for the roster engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the roster service can surface, plus the dedicated
//! [`ValidationError`] produced by the record validator.

use thiserror::Error;

/// A failed check from the record validator.
///
/// Variants are declared in the order the validator checks them, and each
/// one displays as the message returned to API callers.
///
/// # Example
///
/// ```
/// use roster_engine::error::ValidationError;
///
/// assert_eq!(ValidationError::MissingFullName.to_string(), "Full name is required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Full name was absent or blank.
    #[error("Full name is required")]
    MissingFullName,
    /// Job title was absent or blank.
    #[error("Job title is required")]
    MissingJobTitle,
    /// Country was absent or blank.
    #[error("Country is required")]
    MissingCountry,
    /// Salary was absent, not a number, or not positive once rounded to cents.
    #[error("Salary must be a positive number")]
    InvalidSalary,
    /// Salary was above the largest accepted amount.
    #[error("Salary must not exceed 1000000000000")]
    SalaryTooLarge,
}

/// The main error type for the roster engine.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::NotFound { id: 42 };
/// assert_eq!(error.to_string(), "Employee not found");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A candidate employee record failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record exists for the identifier.
    #[error("Employee not found")]
    NotFound {
        /// The identifier that was looked up.
        id: i64,
    },

    /// The identifier could not be parsed as an integer.
    #[error("Invalid employee ID")]
    InvalidId {
        /// The raw identifier text.
        raw: String,
    },

    /// The record store failed.
    #[error("Store error: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A salary total could not be represented.
    #[error("Salary total overflowed for '{group}'")]
    SalaryOverflow {
        /// The metrics group being summed.
        group: String,
    },

    /// A seed record in the configuration failed validation.
    #[error("Invalid seed employee #{index}: {message}")]
    InvalidSeed {
        /// Zero-based position of the record in the seed file.
        index: usize,
        /// The validation message.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
