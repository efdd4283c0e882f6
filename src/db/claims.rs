use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use crate::errors::ReportError;
use crate::models::{amount_to_cents, ClaimStatus};
use super::Database;

impl Database {
    pub fn create_claim(
        &self,
        enrollment_id: i64,
        amount: Decimal,
        status: ClaimStatus,
        filed_on: NaiveDate,
    ) -> Result<i64, ReportError> {
        let amount_cents = amount_to_cents(amount)?;
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO claims (enrollment_id, amount_cents, status, filed_on, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![enrollment_id, amount_cents, status.as_str(), filed_on.to_string(), Utc::now().to_rfc3339()],
        ).map_err(|e| ReportError::DataAccess(format!("Failed to create claim: {}", e)))?;
        Ok(conn.last_insert_rowid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EnrollmentStatus;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn enrollment(db: &Database) -> i64 {
        let org = db.create_organization("Acme").unwrap();
        let emp = db.create_employee(org, "Ada", None, day()).unwrap();
        db.create_enrollment(emp, "Health", Decimal::new(30_000, 2), EnrollmentStatus::Active, day()).unwrap()
    }

    #[test]
    fn test_db_create_claim_stores_status() {
        let db = Database::in_memory().unwrap();
        let enrollment_id = enrollment(&db);
        let id = db.create_claim(enrollment_id, Decimal::new(7_500, 2), ClaimStatus::Approved, day()).unwrap();

        let status: String = db.read_snapshot(|conn| {
            conn.query_row("SELECT status FROM claims WHERE id = ?1", [id], |row| row.get(0))
                .map_err(|e| ReportError::DataAccess(e.to_string()))
        }).unwrap();
        assert_eq!(status, "approved");
    }

    #[test]
    fn test_db_create_claim_unknown_enrollment() {
        let db = Database::in_memory().unwrap();
        let result = db.create_claim(404, Decimal::new(100, 2), ClaimStatus::Pending, day());
        assert!(matches!(result, Err(ReportError::DataAccess(_))));
    }
}
