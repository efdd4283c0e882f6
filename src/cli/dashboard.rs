use crate::cli::commands::DashboardArgs;
use crate::cli::load_config;
use crate::db::Database;
use crate::errors::ReportError;
use crate::reporting::formatter::format_dashboard_markdown;
use crate::reporting::{OrganizationFilter, ReportService};
use tracing::info;

pub async fn handle_dashboard(args: DashboardArgs) -> Result<(), ReportError> {
    let config = load_config(args.config.as_deref()).await?;
    let filter = OrganizationFilter::parse(args.organization.as_deref())?;
    let db_path = args.db.as_deref().unwrap_or(config.database_path());

    info!(db = %db_path, filter = %filter, "Building dashboard");
    let service = ReportService::new(Database::open_existing(db_path)?, config.export_options());
    let dashboard = service.dashboard(filter)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        println!("{}", format_dashboard_markdown(&dashboard));
    }

    Ok(())
}
