//! Application state for the roster API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::EmployeeStore;

/// Shared application state.
///
/// Holds the record store every handler reads from and writes to.
#[derive(Clone)]
pub struct AppState {
    /// The employee record store.
    store: Arc<dyn EmployeeStore>,
}

impl AppState {
    /// Creates a new application state around the given store.
    pub fn new(store: impl EmployeeStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Returns the record store.
    pub fn store(&self) -> &dyn EmployeeStore {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_the_store() {
        let state = AppState::new(InMemoryStore::new());
        let cloned = state.clone();
        assert!(std::ptr::addr_eq(state.store(), cloned.store()));
    }
}
