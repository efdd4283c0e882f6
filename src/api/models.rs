use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Default)]
pub struct DashboardQuery {
    /// Kept as text so malformed ids surface as validation errors.
    pub organization_id: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ExportQuery {
    pub format: Option<String>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub git_hash: &'static str,
    pub build_timestamp: &'static str,
}
