use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use crate::errors::ReportError;
use crate::models::{amount_to_cents, EnrollmentStatus};
use super::Database;

impl Database {
    pub fn create_enrollment(
        &self,
        employee_id: i64,
        policy_name: &str,
        premium: Decimal,
        status: EnrollmentStatus,
        enrolled_on: NaiveDate,
    ) -> Result<i64, ReportError> {
        let premium_cents = amount_to_cents(premium)?;
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO enrollments (employee_id, policy_name, premium_cents, status, enrolled_on, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                employee_id,
                policy_name,
                premium_cents,
                status.as_str(),
                enrolled_on.to_string(),
                Utc::now().to_rfc3339(),
            ],
        ).map_err(|e| ReportError::DataAccess(format!("Failed to create enrollment: {}", e)))?;
        Ok(conn.last_insert_rowid())
    }
}
