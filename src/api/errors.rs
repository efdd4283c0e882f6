use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::error;
use crate::errors::ReportError;

impl IntoResponse for ReportError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            ReportError::Validation(_) => StatusCode::BAD_REQUEST,
            ReportError::DataAccess(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let class = self.classify();
        if status.is_server_error() {
            error!(error_type = class.error_type, error = %self, "Report request failed");
        }

        (status, Json(json!({
            "error": self.to_string(),
            "type": class.error_type,
            "retryable": class.retryable,
        }))).into_response()
    }
}
