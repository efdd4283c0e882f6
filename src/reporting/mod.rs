pub mod aggregation;
pub mod export;
pub mod filter;
pub mod formatter;
pub mod service;

pub use export::{ExportFormat, ExportOptions};
pub use filter::OrganizationFilter;
pub use service::{ReportService, ReportStage};
