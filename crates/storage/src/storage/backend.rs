use async_trait::async_trait;
use employee_registry_core::{Employee, EmployeeInput};
use tokio::task::spawn_blocking;

use super::Storage;
use crate::error::StorageError;
use crate::traits::EmployeeStore;

#[async_trait]
impl EmployeeStore for Storage {
    async fn find_all(&self) -> Result<Vec<Employee>, StorageError> {
        let storage = self.clone();
        spawn_blocking(move || storage.find_all()).await?
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, StorageError> {
        let storage = self.clone();
        spawn_blocking(move || storage.find_by_id(id)).await?
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, StorageError> {
        let storage = self.clone();
        let email = email.to_owned();
        spawn_blocking(move || storage.find_by_email(&email)).await?
    }

    async fn find_by_first_name(&self, first_name: &str) -> Result<Vec<Employee>, StorageError> {
        let storage = self.clone();
        let first_name = first_name.to_owned();
        spawn_blocking(move || storage.find_by_first_name(&first_name)).await?
    }

    async fn find_by_first_name_containing(
        &self,
        query: &str,
    ) -> Result<Vec<Employee>, StorageError> {
        let storage = self.clone();
        let query = query.to_owned();
        spawn_blocking(move || storage.find_by_first_name_containing(&query)).await?
    }

    async fn find_by_last_name_containing(
        &self,
        query: &str,
    ) -> Result<Vec<Employee>, StorageError> {
        let storage = self.clone();
        let query = query.to_owned();
        spawn_blocking(move || storage.find_by_last_name_containing(&query)).await?
    }

    async fn find_by_first_and_last_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<Employee>, StorageError> {
        let storage = self.clone();
        let first_name = first_name.to_owned();
        let last_name = last_name.to_owned();
        spawn_blocking(move || storage.find_by_first_and_last_name(&first_name, &last_name)).await?
    }

    async fn find_distinct_first_names(&self) -> Result<Vec<String>, StorageError> {
        let storage = self.clone();
        spawn_blocking(move || storage.find_distinct_first_names()).await?
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, StorageError> {
        let storage = self.clone();
        spawn_blocking(move || storage.exists_by_id(id)).await?
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, StorageError> {
        let storage = self.clone();
        let email = email.to_owned();
        spawn_blocking(move || storage.exists_by_email(&email)).await?
    }

    async fn save(&self, input: &EmployeeInput) -> Result<Employee, StorageError> {
        let storage = self.clone();
        let input = input.clone();
        spawn_blocking(move || storage.save(&input)).await?
    }

    async fn save_all(&self, inputs: &[EmployeeInput]) -> Result<Vec<Employee>, StorageError> {
        let storage = self.clone();
        let inputs = inputs.to_vec();
        spawn_blocking(move || storage.save_all(&inputs)).await?
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StorageError> {
        let storage = self.clone();
        spawn_blocking(move || storage.delete_by_id(id)).await?
    }

    async fn count(&self) -> Result<u64, StorageError> {
        let storage = self.clone();
        spawn_blocking(move || storage.count()).await?
    }
}
