use chrono::{NaiveDate, Utc};
use crate::errors::ReportError;
use super::Database;

impl Database {
    pub fn create_employee(
        &self,
        organization_id: i64,
        full_name: &str,
        email: Option<&str>,
        hired_on: NaiveDate,
    ) -> Result<i64, ReportError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO employees (organization_id, full_name, email, hired_on, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![organization_id, full_name, email, hired_on.to_string(), Utc::now().to_rfc3339()],
        ).map_err(|e| ReportError::DataAccess(format!("Failed to create employee: {}", e)))?;
        Ok(conn.last_insert_rowid())
    }

    /// Mark an employee as no longer current. Returns false if no such employee exists.
    pub fn terminate_employee(&self, id: i64, terminated_on: NaiveDate) -> Result<bool, ReportError> {
        let conn = self.lock()?;
        let affected = conn.execute(
            "UPDATE employees SET terminated_on = ?2 WHERE id = ?1",
            rusqlite::params![id, terminated_on.to_string()],
        ).map_err(|e| ReportError::DataAccess(format!("Update failed: {}", e)))?;
        Ok(affected > 0)
    }
}
