use chrono::Utc;
use rusqlite::Connection;
use crate::errors::ReportError;
use super::Database;

impl Database {
    pub fn create_organization(&self, name: &str) -> Result<i64, ReportError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO organizations (name, created_at) VALUES (?1, ?2)",
            rusqlite::params![name, Utc::now().to_rfc3339()],
        ).map_err(|e| ReportError::DataAccess(format!("Failed to create organization: {}", e)))?;
        Ok(conn.last_insert_rowid())
    }
}

/// Check for an organization using a connection that is already inside a snapshot.
pub fn organization_exists(conn: &Connection, id: i64) -> Result<bool, ReportError> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM organizations WHERE id = ?1)",
        rusqlite::params![id],
        |row: &rusqlite::Row| row.get::<_, bool>(0),
    ).map_err(|e| ReportError::DataAccess(format!("Query error: {}", e)))
}
