use anyhow::Result;
use employee_registry_http::{AppState, create_router};
use employee_registry_service::EmployeeService;
use std::path::Path;
use std::sync::Arc;

use crate::open_backend;

pub(crate) async fn run(db_path: &Path, port: u16, host: String) -> Result<()> {
    let storage = Arc::new(open_backend(db_path).await?);
    tracing::info!(backend = storage.kind(), "Storage ready");

    let employee_service = Arc::new(EmployeeService::new(storage));
    let state = Arc::new(AppState { employee_service });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
