//! PostgreSQL storage backend using sqlx.

mod employees;

use std::time::Duration;

use employee_registry_core::{
    Employee, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }

    /// Points the id sequence at the id after the highest stored one (1 when empty).
    ///
    /// Needed after rows were written with explicit ids, e.g. by a data import.
    pub async fn sync_id_sequence(&self) -> Result<(), StorageError> {
        sqlx::query(
            "SELECT setval(pg_get_serial_sequence('employees', 'id'),
                           COALESCE((SELECT MAX(id) FROM employees), 0) + 1, false)",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

pub(crate) const EMPLOYEE_COLUMNS: &str = "id, first_name, last_name, email";

pub(crate) fn row_to_employee(row: &PgRow) -> Result<Employee, StorageError> {
    Ok(Employee {
        id: row.try_get("id")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        email: row.try_get("email")?,
    })
}
