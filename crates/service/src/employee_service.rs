use std::collections::HashSet;
use std::sync::Arc;

use employee_registry_core::{Employee, EmployeeInput};
use employee_registry_storage::{EmployeeStore, StorageBackend, StorageError};

use crate::error::{Lookup, ServiceError};
use crate::rules::{ensure_email_unique, ensure_email_unique_except, ensure_exists, validate_email};

pub struct EmployeeService {
    storage: Arc<StorageBackend>,
}

/// First email that occurs more than once in `inputs`.
fn first_repeated_email(inputs: &[EmployeeInput]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(inputs.len());
    inputs.iter().map(|input| input.email.as_str()).find(|email| !seen.insert(*email))
}

/// A unique-index violation on write means another row holds `email`.
fn map_write_error(err: StorageError, email: &str) -> ServiceError {
    if err.is_duplicate() {
        ServiceError::DuplicateEmail { email: email.to_owned() }
    } else {
        ServiceError::Storage(err)
    }
}

impl EmployeeService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn list_all(&self) -> Result<Vec<Employee>, ServiceError> {
        Ok(self.storage.find_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Employee, ServiceError> {
        self.storage.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found_id(id))
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Employee, ServiceError> {
        self.storage
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::NotFound(Lookup::Email(email.to_owned())))
    }

    /// Case-sensitive substring match on first name.
    pub async fn search_by_first_name(&self, query: &str) -> Result<Vec<Employee>, ServiceError> {
        tracing::debug!(query, "first name containment search");
        Ok(self.storage.find_by_first_name_containing(query).await?)
    }

    /// Case-sensitive substring match on last name.
    pub async fn search_by_last_name(&self, query: &str) -> Result<Vec<Employee>, ServiceError> {
        tracing::debug!(query, "last name containment search");
        Ok(self.storage.find_by_last_name_containing(query).await?)
    }

    pub async fn find_by_first_name(
        &self,
        first_name: &str,
    ) -> Result<Vec<Employee>, ServiceError> {
        Ok(self.storage.find_by_first_name(first_name).await?)
    }

    pub async fn search_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<Employee>, ServiceError> {
        Ok(self.storage.find_by_first_and_last_name(first_name, last_name).await?)
    }

    pub async fn unique_first_names(&self) -> Result<Vec<String>, ServiceError> {
        Ok(self.storage.find_distinct_first_names().await?)
    }

    /// Any id carried by `input` is discarded; storage assigns a fresh one.
    pub async fn create(&self, input: EmployeeInput) -> Result<Employee, ServiceError> {
        let input = input.with_id(None);
        if let Err(e) = self.check_new_email(&input.email).await {
            tracing::warn!(email = %input.email, error = %e, "create rejected");
            return Err(e);
        }
        let created =
            self.storage.save(&input).await.map_err(|e| map_write_error(e, &input.email))?;
        tracing::info!(id = created.id, "employee created");
        Ok(created)
    }

    /// Replaces the stored fields of employee `id`, which always wins over a body id.
    pub async fn update(&self, id: i64, input: EmployeeInput) -> Result<Employee, ServiceError> {
        ensure_exists(id, self.storage.as_ref()).await?;
        let input = input.with_id(Some(id));
        validate_email(&input.email)
            .inspect_err(|e| tracing::warn!(id, error = %e, "update rejected"))?;
        ensure_email_unique_except(&input.email, id, self.storage.as_ref())
            .await
            .inspect_err(|e| tracing::warn!(id, error = %e, "update rejected"))?;
        let updated =
            self.storage.save(&input).await.map_err(|e| map_write_error(e, &input.email))?;
        tracing::info!(id, "employee updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<String, ServiceError> {
        ensure_exists(id, self.storage.as_ref()).await?;
        self.storage.delete_by_id(id).await?;
        tracing::info!(id, "employee deleted");
        Ok(format!("Employee with ID {id} has been deleted."))
    }

    pub async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.storage.count().await?)
    }

    /// Checks every element before saving any; the batch is written in one transaction.
    ///
    /// Uniqueness is pre-checked only against stored rows. Repeated emails inside
    /// the batch are rejected by the unique index, which rolls the whole batch back.
    pub async fn bulk_create(
        &self,
        inputs: Vec<EmployeeInput>,
    ) -> Result<Vec<Employee>, ServiceError> {
        let inputs: Vec<EmployeeInput> =
            inputs.into_iter().map(|input| input.with_id(None)).collect();
        for (index, input) in inputs.iter().enumerate() {
            if let Err(e) = self.check_new_email(&input.email).await {
                tracing::warn!(index, error = %e, "bulk create rejected");
                return Err(e);
            }
        }
        let created = self.storage.save_all(&inputs).await.map_err(|e| {
            match first_repeated_email(&inputs) {
                Some(email) if e.is_duplicate() => {
                    tracing::warn!(email, "bulk create rejected: repeated email in batch");
                    ServiceError::DuplicateEmail { email: email.to_owned() }
                },
                _ => ServiceError::Storage(e),
            }
        })?;
        tracing::info!(count = created.len(), "employee batch created");
        Ok(created)
    }

    async fn check_new_email(&self, email: &str) -> Result<(), ServiceError> {
        validate_email(email)?;
        ensure_email_unique(email, self.storage.as_ref()).await
    }
}
