//! Report aggregation and export for benefits administration.
//!
//! [`reporting::ReportService`] is the entry point: it computes dashboard
//! summaries from one consistent read of the operational store and renders
//! the employee-count report as a spreadsheet or PDF.

pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod reporting;
