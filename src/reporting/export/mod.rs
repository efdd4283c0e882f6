//! Downloadable renderings of the employee-count report.
//!
//! Both formats share one contract: rows are written in the order given, a
//! row count above [`ExportOptions::max_rows`] fails instead of truncating,
//! and identical input produces identical bytes.

pub mod document;
pub mod spreadsheet;

use std::fmt;
use std::str::FromStr;
use crate::errors::ReportError;
use crate::models::EmployeeCountRow;

/// Column labels shared by every format.
pub const HEADER: [&str; 3] = ["Organization ID", "Organization Name", "Employee Count"];

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Spreadsheet,
    Document,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Spreadsheet => "xlsx",
            ExportFormat::Document => "pdf",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Spreadsheet => XLSX_CONTENT_TYPE,
            ExportFormat::Document => PDF_CONTENT_TYPE,
        }
    }

    pub fn file_name(&self, stem: &str) -> String {
        format!("{}.{}", stem, self.extension())
    }

    pub fn render(&self, rows: &[EmployeeCountRow], options: &ExportOptions) -> Result<Vec<u8>, ReportError> {
        if rows.len() > options.max_rows {
            return Err(ReportError::ExportGeneration(format!(
                "Report exceeds the export limit of {} rows",
                options.max_rows
            )));
        }

        match self {
            ExportFormat::Spreadsheet => spreadsheet::render(rows, options),
            ExportFormat::Document => document::render(rows, options),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xlsx" | "spreadsheet" | "excel" => Ok(ExportFormat::Spreadsheet),
            "pdf" | "document" => Ok(ExportFormat::Document),
            other => Err(ReportError::Validation(format!(
                "Unsupported export format '{}', expected xlsx or pdf",
                other
            ))),
        }
    }
}

/// Rendering knobs, resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub max_rows: usize,
    pub file_stem: String,
    pub sheet_name: String,
    pub document_title: String,
    pub rows_per_page: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            max_rows: 100_000,
            file_stem: "employee-counts".to_string(),
            sheet_name: "Employees".to_string(),
            document_title: "Employees by Organization".to_string(),
            rows_per_page: document::MAX_ROWS_PER_PAGE,
        }
    }
}
