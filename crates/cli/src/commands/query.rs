use anyhow::Result;
use employee_registry_service::EmployeeService;
use std::path::Path;
use std::sync::Arc;

use crate::open_backend;

async fn open_service(db_path: &Path) -> Result<EmployeeService> {
    Ok(EmployeeService::new(Arc::new(open_backend(db_path).await?)))
}

pub(crate) async fn run_list(db_path: &Path) -> Result<()> {
    let service = open_service(db_path).await?;
    let employees = service.list_all().await?;
    println!("{}", serde_json::to_string_pretty(&employees)?);
    Ok(())
}

pub(crate) async fn run_get(db_path: &Path, id: i64) -> Result<()> {
    let service = open_service(db_path).await?;
    match service.get_by_id(id).await {
        Ok(employee) => println!("{}", serde_json::to_string_pretty(&employee)?),
        Err(e) if e.is_not_found() => println!("{e}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

pub(crate) async fn run_count(db_path: &Path) -> Result<()> {
    let service = open_service(db_path).await?;
    println!("{}", service.count().await?);
    Ok(())
}
