//! Migration v1: employees table with unique email

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL DEFAULT '',
    last_name TEXT NOT NULL DEFAULT '',
    email TEXT NOT NULL
);

CREATE UNIQUE INDEX IF NOT EXISTS idx_employees_email ON employees(email);
";
