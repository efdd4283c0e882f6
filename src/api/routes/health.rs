use axum::Json;
use crate::api::models::HealthResponse;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "benefit-reports",
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("GIT_HASH").unwrap_or("dev"),
        build_timestamp: option_env!("BUILD_TIMESTAMP").unwrap_or("unknown"),
    })
}
