//! `SQLite` storage implementation.
//!
//! Methods here are synchronous; `backend.rs` lifts them onto the async
//! [`EmployeeStore`](crate::traits::EmployeeStore) port via `spawn_blocking`.

mod backend;
mod employees;

use employee_registry_core::env_config::env_parse_with_default;
use employee_registry_core::{SQLITE_POOL_DEFAULT_SIZE, SQLITE_POOL_SIZE_ENV};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;

use crate::error::StorageError;
use crate::migrations;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Main storage struct wrapping `SQLite` connection pool
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Concurrency settings applied to every pooled connection
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

impl Storage {
    /// Open (or create) the database at `db_path` and bring the schema up to date.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = env_parse_with_default(SQLITE_POOL_SIZE_ENV, SQLITE_POOL_DEFAULT_SIZE);
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        let conn = get_conn(&pool)?;
        migrations::run_migrations(&conn).map_err(|e| StorageError::Migration(e.to_string()))?;
        drop(conn);

        tracing::info!(path = %db_path.display(), pool_size, "SQLite storage initialized");

        Ok(Self { pool })
    }
}
