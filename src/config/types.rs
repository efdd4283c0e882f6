use serde::{Deserialize, Serialize};
use crate::reporting::ExportOptions;

pub const DEFAULT_DB_PATH: &str = "./data/benefits.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ReportsConfig {
    pub database: Option<DatabaseConfig>,
    pub export: Option<ExportConfig>,
    pub server: Option<ServerConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DatabaseConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ExportConfig {
    pub max_rows: Option<usize>,
    pub file_stem: Option<String>,
    pub sheet_name: Option<String>,
    pub document_title: Option<String>,
    pub rows_per_page: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl ReportsConfig {
    pub fn database_path(&self) -> &str {
        self.database
            .as_ref()
            .and_then(|d| d.path.as_deref())
            .unwrap_or(DEFAULT_DB_PATH)
    }

    pub fn host(&self) -> &str {
        self.server
            .as_ref()
            .and_then(|s| s.host.as_deref())
            .unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.server.as_ref().and_then(|s| s.port).unwrap_or(DEFAULT_PORT)
    }

    /// Export options with unset fields taken from the defaults.
    pub fn export_options(&self) -> ExportOptions {
        let defaults = ExportOptions::default();
        let Some(export) = &self.export else {
            return defaults;
        };
        ExportOptions {
            max_rows: export.max_rows.unwrap_or(defaults.max_rows),
            file_stem: export.file_stem.clone().unwrap_or(defaults.file_stem),
            sheet_name: export.sheet_name.clone().unwrap_or(defaults.sheet_name),
            document_title: export.document_title.clone().unwrap_or(defaults.document_title),
            rows_per_page: export.rows_per_page.unwrap_or(defaults.rows_per_page),
        }
    }
}
