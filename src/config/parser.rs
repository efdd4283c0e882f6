use std::path::Path;
use crate::errors::ReportError;
use crate::reporting::export::document::MAX_ROWS_PER_PAGE;
use super::types::ReportsConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::warn;

pub async fn parse_config(path: &Path) -> Result<ReportsConfig, ReportError> {
    if !path.exists() {
        return Err(ReportError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(ReportError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    parse_config_str(&content)
}

pub fn parse_config_str(content: &str) -> Result<ReportsConfig, ReportError> {
    // An empty file is a valid, all-defaults config
    if content.trim().is_empty() {
        return Ok(ReportsConfig::default());
    }

    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;

    // JSON Schema validation
    validate_schema(&yaml)?;

    // Parse into typed config
    let config: ReportsConfig = serde_yaml::from_value(yaml)?;

    validate_settings(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), ReportError> {
    // Convert YAML value to JSON for schema validation
    let json_str = serde_json::to_string(yaml)
        .map_err(|e| ReportError::Config(format!("Config conversion error: {}", e)))?;
    let json_value: serde_json::Value = serde_json::from_str(&json_str)
        .map_err(|e| ReportError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| ReportError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        // Advisory only; hard limits are enforced in validate_settings
        for e in errors {
            warn!(validation_error = %format!("{} at {}", e, e.instance_path), "Config schema warning");
        }
    }

    Ok(())
}

/// Reject values the report renderers cannot honor.
fn validate_settings(config: &ReportsConfig) -> Result<(), ReportError> {
    if let Some(export) = &config.export {
        if export.max_rows == Some(0) {
            return Err(ReportError::Config("export.max_rows must be at least 1".into()));
        }

        if let Some(per_page) = export.rows_per_page {
            if per_page == 0 || per_page > MAX_ROWS_PER_PAGE {
                return Err(ReportError::Config(format!(
                    "export.rows_per_page must be between 1 and {}",
                    MAX_ROWS_PER_PAGE
                )));
            }
        }

        if let Some(stem) = &export.file_stem {
            // The stem ends up inside a quoted Content-Disposition filename
            if stem.trim().is_empty() || stem.contains(['/', '\\', '"']) || stem.chars().any(char::is_control) {
                return Err(ReportError::Config(format!(
                    "export.file_stem must be a plain file name, got '{}'",
                    stem
                )));
            }
        }

        if let Some(sheet) = &export.sheet_name {
            validate_sheet_name(sheet)?;
        }
    }

    if let Some(db) = &config.database {
        if db.path.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(ReportError::Config("database.path must not be empty".into()));
        }
    }

    Ok(())
}

/// Worksheet naming rules enforced by Excel.
fn validate_sheet_name(sheet: &str) -> Result<(), ReportError> {
    if sheet.is_empty() || sheet.chars().count() > 31 {
        return Err(ReportError::Config("export.sheet_name must be 1 to 31 characters".into()));
    }
    if sheet.contains(SHEET_NAME_FORBIDDEN) {
        return Err(ReportError::Config(format!(
            "export.sheet_name must not contain any of {}, got '{}'",
            SHEET_NAME_FORBIDDEN.iter().collect::<String>(),
            sheet
        )));
    }
    if sheet.starts_with('\'') || sheet.ends_with('\'') {
        return Err(ReportError::Config("export.sheet_name must not start or end with an apostrophe".into()));
    }
    if sheet.eq_ignore_ascii_case("history") {
        return Err(ReportError::Config("export.sheet_name 'History' is reserved".into()));
    }
    Ok(())
}

const SHEET_NAME_FORBIDDEN: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];
