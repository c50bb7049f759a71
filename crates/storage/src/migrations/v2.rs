//! Migration v2: indexes for first/last name lookups

pub(super) const SQL: &str = "
CREATE INDEX IF NOT EXISTS idx_employees_first_name ON employees(first_name);
CREATE INDEX IF NOT EXISTS idx_employees_full_name ON employees(first_name, last_name);
";
