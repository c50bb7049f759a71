//! Test utilities and module declarations for storage tests.

use crate::Storage;
use employee_registry_core::EmployeeInput;
use tempfile::TempDir;

pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

pub fn create_test_input(first: &str, last: &str) -> EmployeeInput {
    EmployeeInput::new(
        first,
        last,
        format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
    )
}
