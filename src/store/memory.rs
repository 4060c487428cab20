//! In-process employee store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{Employee, NewEmployee};
use crate::roster::to_cents;

use super::EmployeeStore;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Employee>,
    last_id: i64,
}

/// An [`EmployeeStore`] backed by an in-memory table.
///
/// Identifiers start at 1 and are never reused, even after deletes.
/// Salaries are stored rounded to two decimal places.
///
/// # Example
///
/// ```
/// use roster_engine::models::NewEmployee;
/// use roster_engine::store::{EmployeeStore, InMemoryStore};
/// use rust_decimal::Decimal;
///
/// # #[tokio::main]
/// # async fn main() {
/// let store = InMemoryStore::new();
/// let created = store
///     .insert(NewEmployee {
///         full_name: "Asha Rao".to_string(),
///         job_title: "Engineer".to_string(),
///         country: "India".to_string(),
///         salary: Decimal::new(5000000, 2),
///     })
///     .await
///     .unwrap();
/// assert_eq!(created.id, 1);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    table: RwLock<Table>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given records, in order.
    pub async fn seeded(employees: Vec<NewEmployee>) -> EngineResult<Self> {
        let store = Self::new();
        for employee in employees {
            store.insert(employee).await?;
        }
        Ok(store)
    }
}

#[async_trait]
impl EmployeeStore for InMemoryStore {
    async fn find_all(&self) -> EngineResult<Vec<Employee>> {
        let table = self.table.read().await;
        Ok(table.rows.values().rev().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> EngineResult<Option<Employee>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, employee: NewEmployee) -> EngineResult<Employee> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let record = Employee {
            id: table.last_id,
            full_name: employee.full_name,
            job_title: employee.job_title,
            country: employee.country,
            salary: to_cents(employee.salary),
            created_at: Utc::now(),
        };
        table.rows.insert(record.id, record.clone());
        debug!(employee_id = record.id, "Inserted employee");
        Ok(record)
    }

    async fn replace(&self, id: i64, employee: NewEmployee) -> EngineResult<Option<Employee>> {
        let mut table = self.table.write().await;
        let Some(record) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        record.full_name = employee.full_name;
        record.job_title = employee.job_title;
        record.country = employee.country;
        record.salary = to_cents(employee.salary);
        debug!(employee_id = id, "Replaced employee");
        Ok(Some(record.clone()))
    }

    async fn remove(&self, id: i64) -> EngineResult<bool> {
        let mut table = self.table.write().await;
        let removed = table.rows.remove(&id).is_some();
        debug!(employee_id = id, removed, "Removed employee");
        Ok(removed)
    }
}
