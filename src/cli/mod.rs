pub mod commands;
pub mod dashboard;
pub mod export;
pub mod serve;

pub use commands::{Cli, Commands};

use std::path::Path;
use crate::config::{parse_config, ReportsConfig};
use crate::errors::ReportError;

/// Load the optional config file, falling back to defaults when none is given.
pub async fn load_config(path: Option<&str>) -> Result<ReportsConfig, ReportError> {
    match path {
        Some(p) => parse_config(Path::new(p)).await,
        None => Ok(ReportsConfig::default()),
    }
}
