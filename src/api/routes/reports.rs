use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use crate::api::models::{DashboardQuery, ExportQuery};
use crate::api::AppState;
use crate::errors::ReportError;
use crate::models::Dashboard;
use crate::reporting::{ExportFormat, OrganizationFilter};

pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<Dashboard>, ReportError> {
    let filter = OrganizationFilter::parse(query.organization_id.as_deref())?;
    let service = state.reports.clone();

    let dashboard = tokio::task::spawn_blocking(move || service.dashboard(filter))
        .await
        .map_err(|e| ReportError::Internal(format!("Dashboard task failed: {}", e)))??;

    Ok(Json(dashboard))
}

pub async fn export_employee_counts(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, ReportError> {
    let format: ExportFormat = query.format.as_deref().unwrap_or("xlsx").parse()?;
    let service = state.reports.clone();

    // Rendering is CPU-bound
    let artifact = tokio::task::spawn_blocking(move || service.export_employee_counts(format))
        .await
        .map_err(|e| ReportError::Internal(format!("Export task failed: {}", e)))??;

    let disposition = format!("attachment; filename=\"{}\"", artifact.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, artifact.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        artifact.bytes,
    ).into_response())
}
