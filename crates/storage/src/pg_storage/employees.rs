//! EmployeeStore implementation for PgStorage.

use async_trait::async_trait;
use employee_registry_core::{Employee, EmployeeInput};
use sqlx::PgExecutor;

use super::{EMPLOYEE_COLUMNS, PgStorage, row_to_employee};
use crate::error::StorageError;
use crate::traits::EmployeeStore;

async fn save_with<'e, E: PgExecutor<'e>>(
    executor: E,
    input: &EmployeeInput,
) -> Result<Employee, StorageError> {
    let row = match input.id {
        None => {
            sqlx::query(&format!(
                "INSERT INTO employees (first_name, last_name, email)
                 VALUES ($1, $2, $3)
                 RETURNING {EMPLOYEE_COLUMNS}"
            ))
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .fetch_one(executor)
            .await?
        },
        Some(id) => {
            sqlx::query(&format!(
                "INSERT INTO employees (id, first_name, last_name, email)
                 VALUES ($1, $2, $3, $4)
                 ON CONFLICT (id) DO UPDATE SET
                   first_name = EXCLUDED.first_name,
                   last_name = EXCLUDED.last_name,
                   email = EXCLUDED.email
                 RETURNING {EMPLOYEE_COLUMNS}"
            ))
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .fetch_one(executor)
            .await?
        },
    };
    row_to_employee(&row)
}

impl PgStorage {
    async fn fetch_employees(
        &self,
        filter: &str,
        binds: &[&str],
    ) -> Result<Vec<Employee>, StorageError> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees {filter} ORDER BY id");
        let mut query = sqlx::query(&sql);
        for value in binds {
            query = query.bind(*value);
        }
        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(row_to_employee).collect()
    }
}

#[async_trait]
impl EmployeeStore for PgStorage {
    async fn find_all(&self) -> Result<Vec<Employee>, StorageError> {
        self.fetch_employees("", &[]).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, StorageError> {
        let row = sqlx::query(&format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_employee(&r)).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, StorageError> {
        let row =
            sqlx::query(&format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE email = $1"))
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;
        row.map(|r| row_to_employee(&r)).transpose()
    }

    async fn find_by_first_name(&self, first_name: &str) -> Result<Vec<Employee>, StorageError> {
        self.fetch_employees("WHERE first_name = $1", &[first_name]).await
    }

    async fn find_by_first_name_containing(
        &self,
        query: &str,
    ) -> Result<Vec<Employee>, StorageError> {
        self.fetch_employees("WHERE strpos(first_name, $1) > 0", &[query]).await
    }

    async fn find_by_last_name_containing(
        &self,
        query: &str,
    ) -> Result<Vec<Employee>, StorageError> {
        self.fetch_employees("WHERE strpos(last_name, $1) > 0", &[query]).await
    }

    async fn find_by_first_and_last_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<Employee>, StorageError> {
        self.fetch_employees("WHERE first_name = $1 AND last_name = $2", &[first_name, last_name])
            .await
    }

    async fn find_distinct_first_names(&self) -> Result<Vec<String>, StorageError> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT first_name FROM employees ORDER BY first_name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, StorageError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM employees WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, StorageError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM employees WHERE email = $1)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn save(&self, input: &EmployeeInput) -> Result<Employee, StorageError> {
        let saved = save_with(&self.pool, input).await?;
        tracing::debug!(id = saved.id, "employee saved");
        Ok(saved)
    }

    async fn save_all(&self, inputs: &[EmployeeInput]) -> Result<Vec<Employee>, StorageError> {
        let mut tx = self.pool.begin().await?;
        let mut saved = Vec::with_capacity(inputs.len());
        for input in inputs {
            saved.push(save_with(&mut *tx, input).await?);
        }
        tx.commit().await?;
        tracing::debug!(count = saved.len(), "employee batch saved");
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, StorageError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
