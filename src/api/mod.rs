//! HTTP API module for the roster engine.
//!
//! This module provides the REST endpoints for managing employees and
//! reading salary metrics.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRequest, ListParams};
pub use response::{ApiError, ApiErrorResponse, MessageResponse};
pub use state::AppState;
