//! Storage port for employee records.
//!
//! Both the `SQLite` and PostgreSQL backends implement [`EmployeeStore`];
//! the service layer only ever sees this trait through `StorageBackend`.

use async_trait::async_trait;
use employee_registry_core::{Employee, EmployeeInput};

use crate::error::StorageError;

/// Key-addressable employee table.
///
/// Every call is independent and transactional on its own; `save_all` is the
/// only multi-row write and commits all rows or none.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// All employees ordered by id.
    async fn find_all(&self) -> Result<Vec<Employee>, StorageError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, StorageError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, StorageError>;

    /// Exact first-name match.
    async fn find_by_first_name(&self, first_name: &str) -> Result<Vec<Employee>, StorageError>;

    /// Case-sensitive substring match on first name.
    async fn find_by_first_name_containing(
        &self,
        query: &str,
    ) -> Result<Vec<Employee>, StorageError>;

    /// Case-sensitive substring match on last name.
    async fn find_by_last_name_containing(
        &self,
        query: &str,
    ) -> Result<Vec<Employee>, StorageError>;

    async fn find_by_first_and_last_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<Employee>, StorageError>;

    /// Distinct first names, sorted.
    async fn find_distinct_first_names(&self) -> Result<Vec<String>, StorageError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, StorageError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, StorageError>;

    /// Insert when `input.id` is `None`, otherwise insert-or-replace that id.
    async fn save(&self, input: &EmployeeInput) -> Result<Employee, StorageError>;

    /// Save every input in one transaction. On error nothing is persisted.
    async fn save_all(&self, inputs: &[EmployeeInput]) -> Result<Vec<Employee>, StorageError>;

    /// Returns `true` if a row was deleted.
    async fn delete_by_id(&self, id: i64) -> Result<bool, StorageError>;

    async fn count(&self) -> Result<u64, StorageError>;
}
