pub mod routes;
pub mod models;
pub mod errors;

use axum::Router;
use tower_http::trace::TraceLayer;
use crate::db::Database;
use crate::errors::ReportError;
use crate::reporting::{ExportOptions, ReportService};

#[derive(Clone)]
pub struct AppState {
    pub reports: ReportService,
}

pub fn create_app_state(db_path: &str, options: ExportOptions) -> Result<AppState, ReportError> {
    let db = Database::open_existing(db_path)?;
    Ok(AppState {
        reports: ReportService::new(db, options),
    })
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", axum::routing::get(routes::health::health_check))
        .route("/api/reports/dashboard", axum::routing::get(routes::reports::get_dashboard))
        .route("/api/reports/employees/export", axum::routing::get(routes::reports::export_employee_counts))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
