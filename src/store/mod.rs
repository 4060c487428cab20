//! Record store boundary.
//!
//! The roster logic never touches persistence directly. Handlers fetch a
//! snapshot through an [`EmployeeStore`] and hand it to the pure functions
//! in [`crate::roster`].

mod memory;

use async_trait::async_trait;

use crate::error::EngineResult;
use crate::models::{Employee, NewEmployee};

pub use memory::InMemoryStore;

/// Persistence for employee records.
///
/// Each call is atomic from the caller's point of view. Identifiers and
/// creation timestamps are assigned by the store.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Returns every record, newest identifier first.
    async fn find_all(&self) -> EngineResult<Vec<Employee>>;

    /// Returns the record with the given identifier, if any.
    async fn find_by_id(&self, id: i64) -> EngineResult<Option<Employee>>;

    /// Stores a new record and returns it with its assigned identifier.
    async fn insert(&self, employee: NewEmployee) -> EngineResult<Employee>;

    /// Replaces every mutable field of an existing record.
    ///
    /// Returns `None` if no record has the identifier.
    async fn replace(&self, id: i64, employee: NewEmployee) -> EngineResult<Option<Employee>>;

    /// Deletes a record. Returns whether a record was removed.
    async fn remove(&self, id: i64) -> EngineResult<bool>;
}
