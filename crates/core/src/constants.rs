//! Shared constants for employee-registry.

/// Base route every employee endpoint is mounted under.
pub const EMPLOYEES_BASE_PATH: &str = "/Employees";

/// Default `SQLite` connection pool size.
pub const SQLITE_POOL_DEFAULT_SIZE: u32 = 8;

/// Env var overriding the `SQLite` connection pool size.
pub const SQLITE_POOL_SIZE_ENV: &str = "EMPLOYEE_REGISTRY_DB_POOL_SIZE";

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Message returned to clients for any unclassified failure.
/// The real error is only logged.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";
