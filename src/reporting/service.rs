use std::fmt;
use tracing::{debug, info};
use crate::db::{organization_exists, Database};
use crate::errors::ReportError;
use crate::models::{Dashboard, ExportArtifact};
use super::aggregation::{
    count_employees_by_organization, count_employees_by_organization_capped,
    sum_premium_by_organization, summarize_claims_by_enrollment,
};
use super::export::{ExportFormat, ExportOptions};
use super::filter::OrganizationFilter;

/// Lifecycle of one report request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStage {
    Received,
    Aggregating,
    Rendering,
    Completed,
}

impl fmt::Display for ReportStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportStage::Received => "received",
            ReportStage::Aggregating => "aggregating",
            ReportStage::Rendering => "rendering",
            ReportStage::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// Entry point for dashboards and downloads.
///
/// Holds no per-request state; cloning is cheap and clones may serve
/// requests concurrently.
#[derive(Clone)]
pub struct ReportService {
    db: Database,
    options: ExportOptions,
}

impl ReportService {
    pub fn new(db: Database, options: ExportOptions) -> Self {
        Self { db, options }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Compute all three dashboard summaries from one consistent snapshot.
    pub fn dashboard(&self, filter: OrganizationFilter) -> Result<Dashboard, ReportError> {
        debug!(stage = %ReportStage::Received, filter = %filter, "Dashboard requested");
        let organization_id = filter.organization_id();

        debug!(stage = %ReportStage::Aggregating, "Running dashboard aggregations");
        let dashboard = self.db.read_snapshot(|conn| {
            if let Some(id) = organization_id {
                if !organization_exists(conn, id)? {
                    return Err(ReportError::Validation(format!("Unknown organization id {}", id)));
                }
            }

            Ok(Dashboard {
                employee_counts: count_employees_by_organization(conn, organization_id)?,
                premium_totals: sum_premium_by_organization(conn, organization_id)?,
                claim_summaries: summarize_claims_by_enrollment(conn)?,
            })
        })?;

        info!(
            stage = %ReportStage::Completed,
            filter = %filter,
            organizations = dashboard.employee_counts.len(),
            enrollments = dashboard.claim_summaries.len(),
            "Dashboard computed"
        );
        Ok(dashboard)
    }

    /// Render the unfiltered employee-count report in the requested format.
    ///
    /// At most `max_rows + 1` rows are read; the extra row only signals that
    /// the limit was exceeded.
    pub fn export_employee_counts(&self, format: ExportFormat) -> Result<ExportArtifact, ReportError> {
        debug!(stage = %ReportStage::Received, format = %format, "Export requested");

        debug!(stage = %ReportStage::Aggregating, "Counting employees");
        let cap = self.options.max_rows.saturating_add(1);
        let rows = self
            .db
            .read_snapshot(|conn| count_employees_by_organization_capped(conn, None, cap))?;

        debug!(stage = %ReportStage::Rendering, rows = rows.len(), "Rendering export");
        let bytes = format.render(&rows, &self.options)?;

        info!(
            stage = %ReportStage::Completed,
            format = %format,
            rows = rows.len(),
            bytes = bytes.len(),
            "Export generated"
        );
        Ok(ExportArtifact {
            bytes,
            file_name: format.file_name(&self.options.file_stem),
            content_type: format.content_type(),
        })
    }
}
