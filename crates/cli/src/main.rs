mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use employee_registry_storage::StorageBackend;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "employee-registry")]
#[command(about = "Employee record management backend", long_about = None)]
struct Cli {
    /// SQLite database file (ignored when DATABASE_URL selects PostgreSQL)
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        #[arg(short, long, default_value = "8080")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print every employee as JSON
    List,
    /// Print one employee as JSON
    Get { id: i64 },
    /// Print the number of employees
    Count,
    /// Bring the database schema up to date
    Migrate,
    /// Copy employees from the SQLite database into PostgreSQL (DATABASE_URL)
    #[cfg(feature = "postgres")]
    MigrateToPostgres,
}

pub(crate) fn get_db_path(override_path: Option<PathBuf>) -> PathBuf {
    override_path.unwrap_or_else(|| {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("employee-registry")
            .join("employees.db")
    })
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// PostgreSQL when built with `postgres` and `DATABASE_URL` is set, `SQLite` otherwise.
pub(crate) async fn open_backend(db_path: &Path) -> Result<StorageBackend> {
    #[cfg(feature = "postgres")]
    if let Ok(url) = std::env::var("DATABASE_URL") {
        return Ok(StorageBackend::new_postgres(&url).await?);
    }
    ensure_db_dir(db_path)?;
    Ok(StorageBackend::new_sqlite(db_path)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let db_path = get_db_path(cli.db_path);

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(&db_path, port, host).await,
        Commands::List => commands::query::run_list(&db_path).await,
        Commands::Get { id } => commands::query::run_get(&db_path, id).await,
        Commands::Count => commands::query::run_count(&db_path).await,
        Commands::Migrate => commands::migrate::run(&db_path).await,
        #[cfg(feature = "postgres")]
        Commands::MigrateToPostgres => commands::migrate::run_to_postgres(&db_path).await,
    }
}
