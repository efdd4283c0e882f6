use std::path::{Path, PathBuf};
use crate::cli::commands::ExportArgs;
use crate::cli::load_config;
use crate::db::Database;
use crate::errors::ReportError;
use crate::reporting::{ExportFormat, ReportService};
use tracing::info;

pub async fn handle_export(args: ExportArgs) -> Result<(), ReportError> {
    let config = load_config(args.config.as_deref()).await?;
    let format: ExportFormat = args.format.parse()?;
    let db_path = args.db.as_deref().unwrap_or(config.database_path());

    let service = ReportService::new(Database::open_existing(db_path)?, config.export_options());
    let artifact = service.export_employee_counts(format)?;

    let target = output_path(Path::new(&args.output), &artifact.file_name);
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(&target, &artifact.bytes).await?;

    info!(path = %target.display(), bytes = artifact.bytes.len(), "Export written");
    println!("Wrote {}", target.display());
    Ok(())
}

/// A directory (existing, or spelled with a trailing separator) receives the
/// suggested file name; anything else is used as the file path itself.
fn output_path(output: &Path, file_name: &str) -> PathBuf {
    let spelled_as_dir = output
        .to_str()
        .is_some_and(|s| s.ends_with('/') || s.ends_with(std::path::MAIN_SEPARATOR));
    if output.is_dir() || spelled_as_dir {
        output.join(file_name)
    } else {
        output.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_directory_gets_suggested_name() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = output_path(dir.path(), "employee-counts.pdf");
        assert_eq!(path, dir.path().join("employee-counts.pdf"));
    }

    #[test]
    fn test_output_path_trailing_separator() {
        let path = output_path(Path::new("reports/"), "employee-counts.xlsx");
        assert_eq!(path, Path::new("reports/").join("employee-counts.xlsx"));
    }

    #[tokio::test]
    async fn test_export_missing_store_writes_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing.db");
        let output = dir.path().join("out");

        let result = handle_export(ExportArgs {
            format: "pdf".to_string(),
            output: format!("{}/", output.display()),
            db: Some(path.to_str().unwrap().to_string()),
            config: None,
        })
        .await;

        assert!(matches!(result, Err(ReportError::DataAccess(_))));
        assert!(!path.exists());
        assert!(!output.exists());
    }

    #[test]
    fn test_output_path_explicit_file() {
        let path = output_path(Path::new("out/headcount.xlsx"), "employee-counts.xlsx");
        assert_eq!(path, PathBuf::from("out/headcount.xlsx"));
    }
}
