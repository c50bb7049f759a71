use employee_registry_core::{Employee, EmployeeInput};
use rusqlite::{Connection, OptionalExtension, Params, Row, params};

use super::{Storage, get_conn};
use crate::error::StorageError;

const EMPLOYEE_COLUMNS: &str = "id, first_name, last_name, email";

fn row_to_employee(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
    })
}

fn query_employees<P: Params>(
    conn: &Connection,
    filter: &str,
    params: P,
) -> Result<Vec<Employee>, StorageError> {
    let mut stmt =
        conn.prepare(&format!("SELECT {EMPLOYEE_COLUMNS} FROM employees {filter} ORDER BY id"))?;
    let rows = stmt.query_map(params, row_to_employee)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

fn query_one<P: Params>(
    conn: &Connection,
    filter: &str,
    params: P,
) -> Result<Option<Employee>, StorageError> {
    Ok(conn
        .query_row(
            &format!("SELECT {EMPLOYEE_COLUMNS} FROM employees {filter}"),
            params,
            row_to_employee,
        )
        .optional()?)
}

/// Insert or replace one row on an existing connection (or transaction).
fn save_on(conn: &Connection, input: &EmployeeInput) -> Result<Employee, StorageError> {
    match input.id {
        None => {
            conn.execute(
                "INSERT INTO employees (first_name, last_name, email) VALUES (?1, ?2, ?3)",
                params![input.first_name, input.last_name, input.email],
            )?;
            Ok(input.clone().into_employee(conn.last_insert_rowid()))
        },
        Some(id) => {
            conn.execute(
                "INSERT INTO employees (id, first_name, last_name, email) VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(id) DO UPDATE SET
                   first_name = excluded.first_name,
                   last_name = excluded.last_name,
                   email = excluded.email",
                params![id, input.first_name, input.last_name, input.email],
            )?;
            Ok(input.clone().into_employee(id))
        },
    }
}

impl Storage {
    pub fn find_all(&self) -> Result<Vec<Employee>, StorageError> {
        let conn = get_conn(&self.pool)?;
        query_employees(&conn, "", [])
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<Employee>, StorageError> {
        let conn = get_conn(&self.pool)?;
        query_one(&conn, "WHERE id = ?1", params![id])
    }

    pub fn find_by_email(&self, email: &str) -> Result<Option<Employee>, StorageError> {
        let conn = get_conn(&self.pool)?;
        query_one(&conn, "WHERE email = ?1", params![email])
    }

    pub fn find_by_first_name(&self, first_name: &str) -> Result<Vec<Employee>, StorageError> {
        let conn = get_conn(&self.pool)?;
        query_employees(&conn, "WHERE first_name = ?1", params![first_name])
    }

    /// `instr` keeps the match case-sensitive (`LIKE` folds ASCII case in `SQLite`).
    pub fn find_by_first_name_containing(
        &self,
        query: &str,
    ) -> Result<Vec<Employee>, StorageError> {
        let conn = get_conn(&self.pool)?;
        query_employees(&conn, "WHERE instr(first_name, ?1) > 0", params![query])
    }

    pub fn find_by_last_name_containing(&self, query: &str) -> Result<Vec<Employee>, StorageError> {
        let conn = get_conn(&self.pool)?;
        query_employees(&conn, "WHERE instr(last_name, ?1) > 0", params![query])
    }

    pub fn find_by_first_and_last_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<Employee>, StorageError> {
        let conn = get_conn(&self.pool)?;
        query_employees(
            &conn,
            "WHERE first_name = ?1 AND last_name = ?2",
            params![first_name, last_name],
        )
    }

    pub fn find_distinct_first_names(&self) -> Result<Vec<String>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt =
            conn.prepare("SELECT DISTINCT first_name FROM employees ORDER BY first_name")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        Ok(rows.collect::<Result<Vec<String>, _>>()?)
    }

    pub fn exists_by_id(&self, id: i64) -> Result<bool, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM employees WHERE id = ?1)",
            params![id],
            |row| row.get(0),
        )?)
    }

    pub fn exists_by_email(&self, email: &str) -> Result<bool, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM employees WHERE email = ?1)",
            params![email],
            |row| row.get(0),
        )?)
    }

    pub fn save(&self, input: &EmployeeInput) -> Result<Employee, StorageError> {
        let conn = get_conn(&self.pool)?;
        let saved = save_on(&conn, input)?;
        tracing::debug!(id = saved.id, "employee saved");
        Ok(saved)
    }

    pub fn save_all(&self, inputs: &[EmployeeInput]) -> Result<Vec<Employee>, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        let mut saved = Vec::with_capacity(inputs.len());
        for input in inputs {
            saved.push(save_on(&tx, input)?);
        }
        tx.commit()?;
        tracing::debug!(count = saved.len(), "employee batch saved");
        Ok(saved)
    }

    pub fn delete_by_id(&self, id: i64) -> Result<bool, StorageError> {
        let conn = get_conn(&self.pool)?;
        let affected = conn.execute("DELETE FROM employees WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    pub fn count(&self) -> Result<u64, StorageError> {
        let conn = get_conn(&self.pool)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
