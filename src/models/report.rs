use rust_decimal::Decimal;
use serde::Serialize;

/// Current head count of one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeCountRow {
    pub organization_id: i64,
    pub organization_name: String,
    pub employee_count: u64,
}

/// Premium collected across one organization's active enrollments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PremiumTotalRow {
    pub organization_id: i64,
    pub organization_name: String,
    pub total_premium_collected: Decimal,
}

/// Claim volume of one enrollment. Only approved claims contribute to the amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimSummaryRow {
    pub enrollment_id: i64,
    pub total_claims: u64,
    pub total_approved_amount: Decimal,
}

/// The three summaries shown on one dashboard, read from a single snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub employee_counts: Vec<EmployeeCountRow>,
    pub premium_totals: Vec<PremiumTotalRow>,
    pub claim_summaries: Vec<ClaimSummaryRow>,
}

/// A rendered report ready for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: &'static str,
}
