use crate::cli::commands::ServeArgs;
use crate::cli::load_config;
use crate::errors::ReportError;
use crate::api;
use tracing::info;

pub async fn handle_serve(args: ServeArgs) -> Result<(), ReportError> {
    let config = load_config(args.config.as_deref()).await?;
    let host = args.host.as_deref().unwrap_or(config.host()).to_string();
    let port = args.port.unwrap_or(config.port());
    let db_path = args.db.as_deref().unwrap_or(config.database_path()).to_string();

    info!(host = %host, port = port, db = %db_path, "Starting report API server");

    let state = api::create_app_state(&db_path, config.export_options())?;
    let app = api::build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| ReportError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
