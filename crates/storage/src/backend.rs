//! Unified storage backend with enum dispatch.

#[cfg(feature = "sqlite")]
use std::path::Path;

use async_trait::async_trait;
use employee_registry_core::{Employee, EmployeeInput};

use crate::error::StorageError;
use crate::traits::EmployeeStore;

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            #[cfg(feature = "sqlite")]
            StorageBackend::Sqlite(s) => <crate::Storage as EmployeeStore>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::pg_storage::PgStorage as EmployeeStore>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    #[cfg(feature = "sqlite")]
    Sqlite(crate::Storage),
    #[cfg(feature = "postgres")]
    Postgres(crate::pg_storage::PgStorage),
}

impl StorageBackend {
    #[cfg(feature = "sqlite")]
    pub fn new_sqlite(db_path: &Path) -> Result<Self, StorageError> {
        Ok(Self::Sqlite(crate::Storage::new(db_path)?))
    }

    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::new(database_url).await?))
    }

    /// Short backend name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => "sqlite",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
        }
    }
}

#[async_trait]
impl EmployeeStore for StorageBackend {
    async fn find_all(&self) -> Result<Vec<Employee>, StorageError> {
        dispatch!(self, find_all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, StorageError> {
        dispatch!(self, find_by_id(id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, StorageError> {
        dispatch!(self, find_by_email(email))
    }

    async fn find_by_first_name(&self, first_name: &str) -> Result<Vec<Employee>, StorageError> {
        dispatch!(self, find_by_first_name(first_name))
    }

    async fn find_by_first_name_containing(
        &self,
        query: &str,
    ) -> Result<Vec<Employee>, StorageError> {
        dispatch!(self, find_by_first_name_containing(query))
    }

    async fn find_by_last_name_containing(
        &self,
        query: &str,
    ) -> Result<Vec<Employee>, StorageError> {
        dispatch!(self, find_by_last_name_containing(query))
    }

    async fn find_by_first_and_last_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<Employee>, StorageError> {
        dispatch!(self, find_by_first_and_last_name(first_name, last_name))
    }

    async fn find_distinct_first_names(&self) -> Result<Vec<String>, StorageError> {
        dispatch!(self, find_distinct_first_names())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, StorageError> {
        dispatch!(self, exists_by_id(id))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, StorageError> {
        dispatch!(self, exists_by_email(email))
    }

    async fn save(&self, input: &EmployeeInput) -> Result<Employee, StorageError> {
        dispatch!(self, save(input))
    }

    async fn save_all(&self, inputs: &[EmployeeInput]) -> Result<Vec<Employee>, StorageError> {
        dispatch!(self, save_all(inputs))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StorageError> {
        dispatch!(self, delete_by_id(id))
    }

    async fn count(&self) -> Result<u64, StorageError> {
        dispatch!(self, count())
    }
}
