//! Grouped summary queries over the operational store.
//!
//! Every function takes a connection that is already inside a read snapshot
//! (see [`crate::db::Database::read_snapshot`]) and performs exactly one
//! `GROUP BY` statement. Groups with no matching records are reported with
//! zero totals rather than omitted, and rows always come back in ascending
//! key order.

use rusqlite::Connection;
use crate::errors::ReportError;
use crate::models::{amount_from_cents, ClaimSummaryRow, EmployeeCountRow, PremiumTotalRow};
use crate::models::{ClaimStatus, EnrollmentStatus};

const EMPLOYEE_COUNTS_SQL: &str = "
SELECT o.id, o.name, COUNT(e.id)
FROM organizations o
LEFT JOIN employees e ON e.organization_id = o.id AND e.terminated_on IS NULL
WHERE ?1 IS NULL OR o.id = ?1
GROUP BY o.id, o.name
ORDER BY o.id ASC
LIMIT ?2";

const PREMIUM_TOTALS_SQL: &str = "
SELECT o.id, o.name, COALESCE(SUM(en.premium_cents), 0)
FROM organizations o
LEFT JOIN employees e ON e.organization_id = o.id
LEFT JOIN enrollments en ON en.employee_id = e.id AND en.status = ?2
WHERE ?1 IS NULL OR o.id = ?1
GROUP BY o.id, o.name
ORDER BY o.id ASC";

const CLAIM_SUMMARIES_SQL: &str = "
SELECT en.id, COUNT(c.id), COALESCE(SUM(CASE WHEN c.status = ?1 THEN c.amount_cents ELSE 0 END), 0)
FROM enrollments en
LEFT JOIN claims c ON c.enrollment_id = en.id
GROUP BY en.id
ORDER BY en.id ASC";

/// Current employees per organization, optionally restricted to one organization.
pub fn count_employees_by_organization(
    conn: &Connection,
    organization_id: Option<i64>,
) -> Result<Vec<EmployeeCountRow>, ReportError> {
    query_employee_counts(conn, organization_id, None)
}

/// Like [`count_employees_by_organization`], but the store returns at most
/// `cap` rows. Callers detect an oversized result by asking for one row more
/// than they accept.
pub fn count_employees_by_organization_capped(
    conn: &Connection,
    organization_id: Option<i64>,
    cap: usize,
) -> Result<Vec<EmployeeCountRow>, ReportError> {
    query_employee_counts(conn, organization_id, Some(cap))
}

fn query_employee_counts(
    conn: &Connection,
    organization_id: Option<i64>,
    cap: Option<usize>,
) -> Result<Vec<EmployeeCountRow>, ReportError> {
    // SQLite treats a negative LIMIT as unbounded
    let limit = match cap {
        Some(cap) => i64::try_from(cap).unwrap_or(i64::MAX),
        None => -1,
    };

    let mut stmt = conn.prepare(EMPLOYEE_COUNTS_SQL)
        .map_err(|e| ReportError::DataAccess(format!("Query failed: {}", e)))?;

    let rows = stmt.query_map(rusqlite::params![organization_id, limit], |row: &rusqlite::Row| {
        Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?, row.get::<_, i64>(2)?))
    }).map_err(|e| ReportError::DataAccess(format!("Query error: {}", e)))?;

    let mut results = Vec::new();
    for row in rows {
        let (organization_id, organization_name, count) =
            row.map_err(|e| ReportError::DataAccess(format!("Row error: {}", e)))?;
        results.push(EmployeeCountRow {
            organization_id,
            organization_name,
            employee_count: non_negative_count(count, "employee count")?,
        });
    }
    Ok(results)
}

/// Premium collected from active enrollments per organization.
pub fn sum_premium_by_organization(
    conn: &Connection,
    organization_id: Option<i64>,
) -> Result<Vec<PremiumTotalRow>, ReportError> {
    let mut stmt = conn.prepare(PREMIUM_TOTALS_SQL)
        .map_err(|e| ReportError::DataAccess(format!("Query failed: {}", e)))?;

    let rows = stmt.query_map(
        rusqlite::params![organization_id, EnrollmentStatus::Active.as_str()],
        |row: &rusqlite::Row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?, row.get::<_, i64>(2)?))
        },
    ).map_err(|e| ReportError::DataAccess(format!("Query error: {}", e)))?;

    let mut results = Vec::new();
    for row in rows {
        let (organization_id, organization_name, cents) =
            row.map_err(|e| ReportError::DataAccess(format!("Row error: {}", e)))?;
        results.push(PremiumTotalRow {
            organization_id,
            organization_name,
            total_premium_collected: amount_from_cents(non_negative_cents(cents, "premium total")?),
        });
    }
    Ok(results)
}

/// Claim count and approved amount per enrollment.
pub fn summarize_claims_by_enrollment(conn: &Connection) -> Result<Vec<ClaimSummaryRow>, ReportError> {
    let mut stmt = conn.prepare(CLAIM_SUMMARIES_SQL)
        .map_err(|e| ReportError::DataAccess(format!("Query failed: {}", e)))?;

    let rows = stmt.query_map(rusqlite::params![ClaimStatus::Approved.as_str()], |row: &rusqlite::Row| {
        Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?, row.get::<_, i64>(2)?))
    }).map_err(|e| ReportError::DataAccess(format!("Query error: {}", e)))?;

    let mut results = Vec::new();
    for row in rows {
        let (enrollment_id, count, approved_cents) =
            row.map_err(|e| ReportError::DataAccess(format!("Row error: {}", e)))?;
        results.push(ClaimSummaryRow {
            enrollment_id,
            total_claims: non_negative_count(count, "claim count")?,
            total_approved_amount: amount_from_cents(non_negative_cents(approved_cents, "approved amount")?),
        });
    }
    Ok(results)
}

fn non_negative_count(value: i64, what: &str) -> Result<u64, ReportError> {
    u64::try_from(value)
        .map_err(|_| ReportError::DataAccess(format!("Store returned negative {}: {}", what, value)))
}

fn non_negative_cents(value: i64, what: &str) -> Result<i64, ReportError> {
    if value < 0 {
        return Err(ReportError::DataAccess(format!("Store returned negative {}: {}", what, value)));
    }
    Ok(value)
}
