//! Schema and data migration commands.

use anyhow::Result;
use std::path::Path;

use crate::open_backend;

/// Opening a backend applies any pending schema migrations.
pub(crate) async fn run(db_path: &Path) -> Result<()> {
    let backend = open_backend(db_path).await?;
    println!("Schema up to date ({} backend)", backend.kind());
    Ok(())
}

/// Copies every employee from `SQLite` into PostgreSQL, keeping ids.
///
/// Idempotent: rows are upserted by id. Fails without writing anything if an
/// email is already taken by a different PostgreSQL row.
#[cfg(feature = "postgres")]
pub(crate) async fn run_to_postgres(db_path: &Path) -> Result<()> {
    use employee_registry_core::EmployeeInput;
    use employee_registry_storage::{EmployeeStore, PgStorage, StorageBackend};

    crate::ensure_db_dir(db_path)?;
    let sqlite = StorageBackend::new_sqlite(db_path)?;

    let pg_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set for migration target"))?;
    let pg = PgStorage::new(&pg_url).await?;

    println!("Migrating employees...");
    let inputs: Vec<EmployeeInput> = sqlite
        .find_all()
        .await?
        .into_iter()
        .map(|e| EmployeeInput::new(e.first_name, e.last_name, e.email).with_id(Some(e.id)))
        .collect();
    let migrated = pg.save_all(&inputs).await?;
    pg.sync_id_sequence().await?;
    println!("  employees: {} migrated", migrated.len());

    println!("\nMigration complete!");
    Ok(())
}
